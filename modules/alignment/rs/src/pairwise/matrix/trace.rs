use std::fmt::{Debug, Formatter};

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use crate::pairwise::dp::Tracer;
use crate::pairwise::scoring::Score;

use super::{check_bounds, Matrix};

/// Set of predecessor directions of a DP cell.
///
/// `DIAGONAL`, `UP` and `LEFT` mark the moves that reproduce the cell score. `UP_OPEN` and
/// `LEFT_OPEN` describe the vertical/horizontal gap that ends in the cell: when set, the gap was
/// opened right here from the neighbouring score cell, otherwise it extends a longer gap.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, BitOr, BitOrAssign, BitAnd, BitAndAssign)]
pub struct Trace(u8);

impl Trace {
    pub const NONE: Trace = Trace(0);
    pub const DIAGONAL: Trace = Trace(1);
    pub const UP_OPEN: Trace = Trace(2);
    pub const UP: Trace = Trace(4);
    pub const LEFT_OPEN: Trace = Trace(8);
    pub const LEFT: Trace = Trace(16);

    /// Moves that reproduce the cell score.
    pub const PRIMARY: Trace = Trace(1 | 4 | 16);

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: Trace) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_diagonal(&self) -> bool {
        self.contains(Trace::DIAGONAL)
    }

    pub fn is_up(&self) -> bool {
        self.contains(Trace::UP)
    }

    pub fn is_left(&self) -> bool {
        self.contains(Trace::LEFT)
    }

    pub fn is_up_open(&self) -> bool {
        self.contains(Trace::UP_OPEN)
    }

    pub fn is_left_open(&self) -> bool {
        self.contains(Trace::LEFT_OPEN)
    }

    /// Start (or unreachable) cell: no move leads here.
    pub fn is_start(&self) -> bool {
        self.0 & Trace::PRIMARY.0 == 0
    }
}

impl Debug for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "NONE");
        }

        let names = [
            (Trace::DIAGONAL, "DIAGONAL"),
            (Trace::UP_OPEN, "UP_OPEN"),
            (Trace::UP, "UP"),
            (Trace::LEFT_OPEN, "LEFT_OPEN"),
            (Trace::LEFT, "LEFT"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Row-major matrix of trace directions filled during the DP scan.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TraceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Trace>,
}

impl TraceMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Trace::NONE; rows * cols],
        }
    }
}

impl Matrix for TraceMatrix {
    type Value = Trace;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> Trace {
        check_bounds(self.rows, self.cols, row, col);
        self.data[row * self.cols + col]
    }
}

impl<S: Score> Tracer<S> for TraceMatrix {
    fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, Trace::NONE);
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, _: S, trace: Trace) {
        self.data[row * self.cols + col] = trace;
    }
}
