use derive_getters::{Dissolve, Getters};

use crate::pairwise::alignment::{Alignment, Coordinate};
use crate::pairwise::matrix::{DenseScoreMatrix, TraceMatrix};
use crate::pairwise::scoring::Score;

/// Outcome of aligning one work item. Optional fields are present according to the output
/// level and the debug flag of the configuration, identically for all results of one run.
#[derive(Clone, Debug, PartialEq, Getters, Dissolve)]
pub struct AlignmentResult<Id, S: Score> {
    /// Correlation id of the work item
    id: Id,
    score: S,
    #[getter(skip)]
    end: Option<Coordinate>,
    #[getter(skip)]
    begin: Option<Coordinate>,
    #[getter(skip)]
    alignment: Option<Alignment>,
    #[getter(skip)]
    score_matrix: Option<DenseScoreMatrix<S>>,
    #[getter(skip)]
    trace_matrix: Option<TraceMatrix>,
}

impl<Id, S: Score> AlignmentResult<Id, S> {
    pub(crate) fn new(id: Id, score: S) -> Self {
        Self {
            id,
            score,
            end: None,
            begin: None,
            alignment: None,
            score_matrix: None,
            trace_matrix: None,
        }
    }

    pub(crate) fn with_end(mut self, end: Option<Coordinate>) -> Self {
        self.end = end;
        self
    }

    pub(crate) fn with_alignment(mut self, alignment: Option<Alignment>, keep: bool) -> Self {
        self.begin = alignment
            .as_ref()
            .map(|x| Coordinate::new(x.query().start, x.database().start));
        self.alignment = if keep { alignment } else { None };
        self
    }

    pub(crate) fn with_matrices(
        mut self,
        scores: Option<DenseScoreMatrix<S>>,
        traces: Option<TraceMatrix>,
    ) -> Self {
        self.score_matrix = scores;
        self.trace_matrix = traces;
        self
    }

    /// Cell of the last aligned column (exclusive sequence ends).
    pub fn end(&self) -> Option<Coordinate> {
        self.end
    }

    /// Cell preceding the first aligned column (inclusive sequence starts).
    pub fn begin(&self) -> Option<Coordinate> {
        self.begin
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.alignment.as_ref()
    }

    pub fn score_matrix(&self) -> Option<&DenseScoreMatrix<S>> {
        self.score_matrix.as_ref()
    }

    pub fn trace_matrix(&self) -> Option<&TraceMatrix> {
        self.trace_matrix.as_ref()
    }
}
