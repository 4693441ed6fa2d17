use std::fmt::Debug;

pub use ::num::{Bounded, Num, NumCast, One, ToPrimitive, Zero};

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values can be used as alignment scores: signed integers or floats that can be shared
/// between worker threads.
pub trait Score: Num + Bounded + PartialOrd + Copy + Debug + Send + Sync + 'static {
    /// A finite stand-in for minus infinity. Adding a single gap/substitution score to it
    /// must not overflow, hence the halved minimum.
    #[inline(always)]
    fn neg_inf() -> Self {
        Self::min_value() / (Self::one() + Self::one())
    }

    /// Maximum of two scores. Ties resolve to the first argument.
    #[inline(always)]
    fn max2(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl<T: Num + Bounded + PartialOrd + Copy + Debug + Send + Sync + 'static> Score for T {}
