use seqalign_core_rs::num::Zero;

use crate::pairwise::scoring::Score;

// A gap of length k costs `open + k * extend`. Both values are added to the score, hence
// penalties are expected to be non-positive.
pub trait Scorer {
    type Score: Score;

    fn open(&self) -> Self::Score;
    fn extend(&self) -> Self::Score;

    /// Linear gaps have no separate opening penalty.
    #[inline(always)]
    fn is_linear(&self) -> bool {
        self.open() == Self::Score::zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Affine<S> {
    pub fn new(open: S, extend: S) -> Self {
        Self { open, extend }
    }

    pub fn linear(extend: S) -> Self {
        Self {
            open: S::zero(),
            extend,
        }
    }
}

impl<S: Score> Scorer for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn extend(&self) -> Self::Score {
        self.extend
    }
}
