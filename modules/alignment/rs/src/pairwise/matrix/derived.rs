use eyre::{ensure, Result};

use seqalign_core_rs::num::Zero;

use crate::pairwise::dp::Mode;
use crate::pairwise::scoring::{gaps, symbols, Scheme};
use crate::Alignable;

use super::{check_bounds, Matrix, Trace};

/// Trace view recomputed on demand from a filled score matrix.
///
/// Each access compares the cell score with its neighbours plus the cost of the corresponding
/// move. Gap opening is invisible in a score matrix, so only linear gap costs are supported.
/// Under them the view is identical to the trace matrix materialized during the fill.
pub struct DerivedTraceMatrix<'a, M, Sch, Q, D>
where
    M: Matrix<Value = <Sch as Scheme>::Score> + ?Sized,
    Sch: Scheme,
    Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
    D: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
{
    scores: &'a M,
    query: &'a Q,
    database: &'a D,
    scheme: &'a Sch,
    mode: Mode,
}

impl<'a, M, Sch, Q, D> DerivedTraceMatrix<'a, M, Sch, Q, D>
where
    M: Matrix<Value = <Sch as Scheme>::Score> + ?Sized,
    Sch: Scheme,
    Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
    D: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
{
    pub fn new(
        scores: &'a M,
        query: &'a Q,
        database: &'a D,
        scheme: &'a Sch,
        mode: Mode,
    ) -> Result<Self> {
        ensure!(
            gaps::Scorer::is_linear(scheme),
            "Trace directions can't be derived from scores under affine gap costs (gap open = {:?})",
            gaps::Scorer::open(scheme)
        );
        ensure!(
            scores.rows() == query.len() + 1 && scores.cols() == database.len() + 1,
            "Score matrix shape {}x{} doesn't match sequences of length {} and {}",
            scores.rows(),
            scores.cols(),
            query.len(),
            database.len()
        );

        Ok(Self {
            scores,
            query,
            database,
            scheme,
            mode,
        })
    }
}

impl<M, Sch, Q, D> Matrix for DerivedTraceMatrix<'_, M, Sch, Q, D>
where
    M: Matrix<Value = <Sch as Scheme>::Score> + ?Sized,
    Sch: Scheme,
    Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
    D: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
{
    type Value = Trace;

    fn rows(&self) -> usize {
        self.scores.rows()
    }

    fn cols(&self) -> usize {
        self.scores.cols()
    }

    fn at(&self, row: usize, col: usize) -> Trace {
        check_bounds(self.rows(), self.cols(), row, col);

        let score = self.scores.at(row, col);
        if self.mode == Mode::Local && score <= <Sch as Scheme>::Score::zero() {
            return Trace::NONE;
        }

        let extend = gaps::Scorer::extend(self.scheme);
        let mut trace = Trace::NONE;
        if row > 0 && col > 0 {
            let substitution = symbols::Scorer::score(
                self.scheme,
                row - 1,
                self.query.at(row - 1),
                col - 1,
                self.database.at(col - 1),
            );
            if self.scores.at(row - 1, col - 1) + substitution == score {
                trace |= Trace::DIAGONAL;
            }
        }
        // Linear gaps are never extended from a longer gap, both gaps are always "open"
        if row > 0 {
            trace |= Trace::UP_OPEN;
            if self.scores.at(row - 1, col) + extend == score {
                trace |= Trace::UP;
            }
        }
        if col > 0 {
            trace |= Trace::LEFT_OPEN;
            if self.scores.at(row, col - 1) + extend == score {
                trace |= Trace::LEFT;
            }
        }
        trace
    }
}
