use std::mem;

use crate::pairwise::dp::{Mode, Tracer};
use crate::pairwise::matrix::Trace;
use crate::pairwise::scoring::{self, gaps, symbols, Score};
use crate::Alignable;

/// Gotoh recurrence over the full (|query| + 1) x (|database| + 1) matrix.
///
/// Only two score rows and one row of vertical gap scores are kept, everything else is
/// streamed to the tracer. Buffers are reused between scans.
#[derive(Clone, Debug, PartialEq)]
pub struct FullScan<S: Score> {
    // Scores of the previous/current row
    hprev: Vec<S>,
    hcur: Vec<S>,
    // Best vertical gap ending in each column of the current row
    vgap: Vec<S>,
}

impl<S: Score> Default for FullScan<S> {
    fn default() -> Self {
        Self {
            hprev: Vec::new(),
            hcur: Vec::new(),
            vgap: Vec::new(),
        }
    }
}

#[inline(always)]
fn settle<S: Score>(mode: Mode, score: S, trace: Trace) -> (S, Trace) {
    match mode {
        Mode::Local if score <= S::zero() => (S::zero(), Trace::NONE),
        _ => (score, trace),
    }
}

impl<S: Score> FullScan<S> {
    pub fn scan<Q, D, Sch, T>(
        &mut self,
        query: &Q,
        database: &D,
        scheme: &Sch,
        mode: Mode,
        tracer: &mut T,
    ) where
        Q: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol> + ?Sized,
        D: Alignable<Symbol = <Sch as scoring::Scheme>::Symbol> + ?Sized,
        Sch: scoring::Scheme<Score = S>,
        T: Tracer<S>,
    {
        let (rows, cols) = (query.len() + 1, database.len() + 1);
        let extend = gaps::Scorer::extend(scheme);
        let open = gaps::Scorer::open(scheme) + extend;

        for buffer in [&mut self.hprev, &mut self.hcur, &mut self.vgap] {
            buffer.clear();
            buffer.resize(cols, S::neg_inf());
        }
        tracer.reset(rows, cols);

        // First row: horizontal gaps only
        self.hprev[0] = S::zero();
        tracer.cell(0, 0, S::zero(), Trace::NONE);

        let mut hgap = S::neg_inf();
        for col in 1..cols {
            let (opened, extended) = (self.hprev[col - 1] + open, hgap + extend);
            let mut trace = Trace::LEFT;
            hgap = if opened >= extended {
                trace |= Trace::LEFT_OPEN;
                opened
            } else {
                extended
            };

            let (score, trace) = settle(mode, hgap, trace);
            self.hprev[col] = score;
            tracer.cell(0, col, score, trace);
        }

        for row in 1..rows {
            let symbol = query.at(row - 1);

            // First column: vertical gaps only
            let (opened, extended) = (self.hprev[0] + open, self.vgap[0] + extend);
            let mut trace = Trace::UP;
            self.vgap[0] = if opened >= extended {
                trace |= Trace::UP_OPEN;
                opened
            } else {
                extended
            };

            let (score, trace) = settle(mode, self.vgap[0], trace);
            self.hcur[0] = score;
            tracer.cell(row, 0, score, trace);

            hgap = S::neg_inf();
            for col in 1..cols {
                let mut trace = Trace::NONE;

                let (opened, extended) = (self.hprev[col] + open, self.vgap[col] + extend);
                let vgap = if opened >= extended {
                    trace |= Trace::UP_OPEN;
                    opened
                } else {
                    extended
                };
                self.vgap[col] = vgap;

                let (opened, extended) = (self.hcur[col - 1] + open, hgap + extend);
                hgap = if opened >= extended {
                    trace |= Trace::LEFT_OPEN;
                    opened
                } else {
                    extended
                };

                let diagonal = self.hprev[col - 1]
                    + symbols::Scorer::score(scheme, row - 1, symbol, col - 1, database.at(col - 1));

                let best = diagonal.max2(vgap).max2(hgap);
                if best == diagonal {
                    trace |= Trace::DIAGONAL;
                }
                if best == vgap {
                    trace |= Trace::UP;
                }
                if best == hgap {
                    trace |= Trace::LEFT;
                }

                let (score, trace) = settle(mode, best, trace);
                self.hcur[col] = score;
                tracer.cell(row, col, score, trace);
            }

            mem::swap(&mut self.hprev, &mut self.hcur);
        }
    }
}
