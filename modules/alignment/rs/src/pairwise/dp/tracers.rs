use std::marker::PhantomData;

use derive_getters::Dissolve;

use crate::pairwise::dp::{Storage, Tracer};
use crate::pairwise::matrix::{DenseScoreMatrix, Trace, TraceMatrix};
use crate::pairwise::scoring;

/// Fans every settled cell out to the storage and the optional matrices.
#[derive(Dissolve)]
pub struct Tracers<S, St>
where
    S: scoring::Score,
    St: Storage<S>,
{
    pub storage: St,
    pub scores: Option<DenseScoreMatrix<S>>,
    pub traces: Option<TraceMatrix>,
    pub _phantom: PhantomData<S>,
}

impl<S, St> Tracers<S, St>
where
    S: scoring::Score,
    St: Storage<S>,
{
    pub fn new(storage: St, scores: Option<DenseScoreMatrix<S>>, traces: Option<TraceMatrix>) -> Self {
        Self {
            storage,
            scores,
            traces,
            _phantom: Default::default(),
        }
    }
}

impl<S, St> Tracer<S> for Tracers<S, St>
where
    S: scoring::Score,
    St: Storage<S>,
{
    #[inline(always)]
    fn reset(&mut self, rows: usize, cols: usize) {
        self.storage.reset(rows, cols);
        self.scores.reset(rows, cols);
        Tracer::<S>::reset(&mut self.traces, rows, cols);
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, trace: Trace) {
        self.storage.cell(row, col, score, trace);
        self.scores.cell(row, col, score, trace);
        self.traces.cell(row, col, score, trace);
    }
}
