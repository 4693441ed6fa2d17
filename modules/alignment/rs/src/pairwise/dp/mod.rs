pub use fill::FullScan;
pub use storage::{Best, Corner, Seed, Storage};
pub use tracers::Tracers;

use crate::pairwise::matrix::Trace;
use crate::pairwise::scoring;

mod fill;
mod storage;
mod tracers;

/// Which part of the DP matrix yields the alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Needleman-Wunsch: both sequences are aligned end to end.
    #[default]
    Global,
    /// Smith-Waterman: best scoring pair of substrings, scores are floored at zero.
    Local,
}

// The DP fill runs row-by-row and notifies the tracer about every settled cell

#[allow(unused_variables)]
pub trait Tracer<S: scoring::Score> {
    fn reset(&mut self, rows: usize, cols: usize) {}
    fn cell(&mut self, row: usize, col: usize, score: S, trace: Trace) {}
}

impl<S: scoring::Score, T: Tracer<S>> Tracer<S> for Option<T> {
    #[inline(always)]
    fn reset(&mut self, rows: usize, cols: usize) {
        if let Some(tracer) = self {
            tracer.reset(rows, cols);
        }
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, trace: Trace) {
        if let Some(tracer) = self {
            tracer.cell(row, col, score, trace);
        }
    }
}
