use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;
use itertools::Itertools;

use seqalign_core_rs::num::{NumCast, PrimUInt};

use super::op::Op;

/// A run of identical alignment columns.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// The same run with the roles of the sequences swapped.
    pub fn swapped(&self) -> Self {
        Self {
            len: self.len,
            op: self.op.swapped(),
        }
    }

    /// Run-length encode a sequence of single columns. Runs longer than `Len::max_value()`
    /// are split into several steps.
    pub fn runs(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let limit = Len::max_value().to_usize().unwrap_or(usize::MAX);

        let mut steps = Vec::new();
        for (mut count, op) in ops.into_iter().dedup_with_count() {
            while count > 0 {
                let chunk = count.min(limit);
                let len = <Len as NumCast>::from(chunk).unwrap_or_else(Len::max_value);
                steps.push(Step { len, op });
                count -= chunk;
            }
        }
        steps
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // ~2 digits + 1 symbol per step
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }

    /// Inverse of `rle_string`.
    pub fn parse_rle(rle: &str) -> Result<Vec<Step<Len>>> {
        let mut steps = Vec::new();
        let mut digits = 0;
        for (ind, chr) in rle.char_indices() {
            if chr.is_ascii_digit() {
                digits += 1;
                continue;
            }
            let op = Op::try_from(chr)
                .map_err(|_| eyre::eyre!("Unknown alignment operation '{chr}' in {rle}"))?;
            let len = rle[ind - digits..ind]
                .parse::<usize>()
                .ok()
                .and_then(<Len as NumCast>::from)
                .ok_or_else(|| eyre::eyre!("Invalid step length before '{chr}' in {rle}"))?;
            steps.push(Step::new(op, len)?);
            digits = 0;
        }
        if digits > 0 {
            return Err(eyre::eyre!("Dangling step length at the end of {rle}"));
        }
        Ok(steps)
    }
}
