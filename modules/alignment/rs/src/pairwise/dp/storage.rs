use crate::pairwise::dp::Tracer;
use crate::pairwise::matrix::Trace;
use crate::pairwise::scoring;

/// End cell of an alignment and its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed<S: scoring::Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

impl<S: scoring::Score> Default for Seed<S> {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            score: S::zero(),
        }
    }
}

pub trait Storage<S: scoring::Score>: Tracer<S> {
    fn finalize(&self) -> Seed<S>;
}

/// Keeps the bottom-right cell: global alignments always end there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner<S: scoring::Score> {
    last: (usize, usize),
    seed: Seed<S>,
}

impl<S: scoring::Score> Default for Corner<S> {
    fn default() -> Self {
        Self {
            last: (0, 0),
            seed: Seed::default(),
        }
    }
}

impl<S: scoring::Score> Tracer<S> for Corner<S> {
    fn reset(&mut self, rows: usize, cols: usize) {
        self.last = (rows - 1, cols - 1);
        self.seed = Seed::default();
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, _: Trace) {
        if (row, col) == self.last {
            self.seed = Seed { row, col, score };
        }
    }
}

impl<S: scoring::Score> Storage<S> for Corner<S> {
    fn finalize(&self) -> Seed<S> {
        self.seed
    }
}

/// Keeps the best scoring cell. Ties resolve to the first cell in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Best<S: scoring::Score> {
    best: Option<Seed<S>>,
}

impl<S: scoring::Score> Default for Best<S> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<S: scoring::Score> Tracer<S> for Best<S> {
    fn reset(&mut self, _: usize, _: usize) {
        self.best = None;
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, _: Trace) {
        match &self.best {
            Some(best) if score <= best.score => {}
            _ => self.best = Some(Seed { row, col, score }),
        }
    }
}

impl<S: scoring::Score> Storage<S> for Best<S> {
    fn finalize(&self) -> Seed<S> {
        self.best.unwrap_or_default()
    }
}
