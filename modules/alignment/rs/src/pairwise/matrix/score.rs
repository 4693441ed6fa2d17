use eyre::{ensure, Result};

use crate::pairwise::dp::Tracer;
use crate::pairwise::scoring::Score;

use super::{check_bounds, Matrix, Trace};

/// Row-major matrix of DP scores.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseScoreMatrix<S: Score> {
    rows: usize,
    cols: usize,
    data: Vec<S>,
}

impl<S: Score> DenseScoreMatrix<S> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![S::zero(); rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        let cols = rows.first().map_or(0, |x| x.len());
        ensure!(
            rows.iter().all(|x| x.len() == cols),
            "All rows of a score matrix must have the same length"
        );
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn row(&self, row: usize) -> &[S] {
        check_bounds(self.rows, self.cols, row, 0);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

impl<S: Score> Default for DenseScoreMatrix<S> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<S: Score> Matrix for DenseScoreMatrix<S> {
    type Value = S;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> S {
        check_bounds(self.rows, self.cols, row, col);
        self.data[row * self.cols + col]
    }
}

impl<S: Score> Tracer<S> for DenseScoreMatrix<S> {
    fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, S::zero());
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: S, _: Trace) {
        self.data[row * self.cols + col] = score;
    }
}
