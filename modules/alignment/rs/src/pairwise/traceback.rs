use crate::pairwise::alignment::{Alignment, Coordinate, Op, Step};
use crate::pairwise::dp::Mode;
use crate::pairwise::matrix::{Matrix, Trace};
use crate::Alignable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    // Score cell, any move is possible
    Score,
    // Inside a vertical gap (query symbols against gaps)
    Vertical,
    // Inside a horizontal gap (database symbols against gaps)
    Horizontal,
}

/// Walk the trace matrix back from `end` and collect the alignment.
///
/// Moves are selected by a fixed priority: diagonal, then up, then left. Global alignments must
/// end in the origin, local ones stop at the first cell without predecessors. Panics if the trace
/// is inconsistent with these rules.
pub fn traceback<M, Q, D>(traces: &M, query: &Q, database: &D, end: Coordinate, mode: Mode) -> Alignment
where
    M: Matrix<Value = Trace> + ?Sized,
    Q: Alignable + ?Sized,
    D: Alignable<Symbol = Q::Symbol> + ?Sized,
{
    assert!(
        end.row < traces.rows() && end.col < traces.cols(),
        "Traceback starts outside of the {}x{} trace matrix: {:?}",
        traces.rows(),
        traces.cols(),
        end
    );

    let (mut row, mut col) = end.dissolve();
    let mut ops = Vec::with_capacity(row + col);
    let mut state = State::Score;

    loop {
        let trace = traces.at(row, col);
        match state {
            State::Score => {
                if trace.is_diagonal() {
                    assert!(row > 0 && col > 0, "Inconsistent trace: diagonal move from ({row}, {col})");
                    row -= 1;
                    col -= 1;
                    ops.push(if query.at(row) == database.at(col) {
                        Op::Match
                    } else {
                        Op::Mismatch
                    });
                } else if trace.is_up() {
                    state = State::Vertical;
                } else if trace.is_left() {
                    state = State::Horizontal;
                } else {
                    break;
                }
            }
            State::Vertical => {
                assert!(row > 0, "Inconsistent trace: vertical gap runs out of the query at column {col}");
                ops.push(Op::GapFirst);
                if trace.is_up_open() {
                    state = State::Score;
                }
                row -= 1;
            }
            State::Horizontal => {
                assert!(col > 0, "Inconsistent trace: horizontal gap runs out of the database at row {row}");
                ops.push(Op::GapSecond);
                if trace.is_left_open() {
                    state = State::Score;
                }
                col -= 1;
            }
        }
    }

    if mode == Mode::Global {
        assert!(
            row == 0 && col == 0,
            "Inconsistent trace: global alignment stops at ({row}, {col}) instead of the origin"
        );
    }

    ops.reverse();
    Alignment::new(Step::runs(ops), row..end.row, col..end.col)
}
