use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use seqalign_core_rs::num::ToPrimitive;

use crate::Alignable;

use super::gapped::Gapped;
use super::op::Op;
use super::step::Step;

/// Aligned columns between query[query] and database[database].
#[derive(Clone, Eq, PartialEq, Debug, Default, Getters, Constructor, Dissolve)]
pub struct Alignment {
    steps: Vec<Step<u32>>,
    query: Range<usize>,
    database: Range<usize>,
}

impl Alignment {
    /// Checks if the alignment is empty.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.steps
            .iter()
            .map(|x| x.len().to_usize().unwrap_or(usize::MAX))
            .sum()
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1X2v4=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Individual alignment columns.
    pub fn columns(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps.iter().flat_map(|x| {
            std::iter::repeat(*x.op()).take(x.len().to_usize().unwrap_or(usize::MAX))
        })
    }

    /// The same alignment with query and database swapped.
    pub fn swapped(&self) -> Self {
        Self {
            steps: self.steps.iter().map(Step::swapped).collect(),
            query: self.database.clone(),
            database: self.query.clone(),
        }
    }

    /// Expand the alignment into two rows of equal length, one per sequence. The sequences
    /// must be the ones the alignment was computed for.
    pub fn gapped<'a, Q, D>(
        &self,
        query: &'a Q,
        database: &'a D,
    ) -> (Vec<Gapped<&'a Q::Symbol>>, Vec<Gapped<&'a D::Symbol>>)
    where
        Q: Alignable + ?Sized,
        D: Alignable + ?Sized,
    {
        assert!(
            self.query.end <= query.len() && self.database.end <= database.len(),
            "Alignment {:?} x {:?} is out of sequence bounds ({} x {})",
            self.query,
            self.database,
            query.len(),
            database.len()
        );

        let total = self.len();
        let (mut qrow, mut drow) = (Vec::with_capacity(total), Vec::with_capacity(total));
        let (mut qpos, mut dpos) = (self.query.start, self.database.start);
        for op in self.columns() {
            let (dq, dd) = op.consumes();
            qrow.push(if dq == 1 { Gapped::Symbol(query.at(qpos)) } else { Gapped::Gap });
            drow.push(if dd == 1 { Gapped::Symbol(database.at(dpos)) } else { Gapped::Gap });
            qpos += dq;
            dpos += dd;
        }
        debug_assert_eq!((qpos, dpos), (self.query.end, self.database.end));
        (qrow, drow)
    }

    /// Gapped rows rendered as text, gaps are shown as `-`.
    pub fn gapped_strings<Q, D>(&self, query: &Q, database: &D) -> (String, String)
    where
        Q: Alignable<Symbol = u8> + ?Sized,
        D: Alignable<Symbol = u8> + ?Sized,
    {
        let (qrow, drow) = self.gapped(query, database);
        let render = |row: Vec<Gapped<&u8>>| -> String {
            row.into_iter()
                .map(|x| match x {
                    Gapped::Symbol(s) => char::from(*s),
                    Gapped::Gap => super::gapped::GAP_CHAR,
                })
                .collect()
        };
        (render(qrow), render(drow))
    }
}
