pub use derived::DerivedTraceMatrix;
pub use score::DenseScoreMatrix;
pub use trace::{Trace, TraceMatrix};

mod derived;
mod score;
mod trace;

/// Read-only 2D table addressed by (row, column).
pub trait Matrix {
    type Value: Copy;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Panics if the cell is outside of the matrix.
    fn at(&self, row: usize, col: usize) -> Self::Value;
}

/// Two matrices are equal if they have the same shape and all entries compare equal.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
    A::Value: PartialEq<B::Value>,
{
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return false;
    }
    (0..a.rows()).all(|row| (0..a.cols()).all(|col| a.at(row, col) == b.at(row, col)))
}

#[inline(always)]
fn check_bounds(rows: usize, cols: usize, row: usize, col: usize) {
    assert!(
        row < rows && col < cols,
        "Cell ({row}, {col}) is outside of the {rows}x{cols} matrix"
    );
}
