use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use seqalign_core_rs::num::Zero;

use crate::pairwise::dp::Mode;
use crate::pairwise::scoring::{compose, gaps, symbols, Scheme, Score, SimpleScheme};

/// What each alignment result carries. Every level includes all previous ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Output {
    /// Alignment score only. No trace is computed and no matrix is allocated.
    Score,
    /// Score and the end cell of the alignment.
    #[default]
    End,
    /// Score, end and begin cells. Requires a traceback.
    Begin,
    /// Everything above plus the aligned columns.
    Alignment,
}

#[derive(Clone, Debug, PartialEq, Getters, Dissolve)]
pub struct Config<Sch: Scheme> {
    scheme: Sch,
    mode: Mode,
    output: Output,
    /// Keep the full score and trace matrices in every result.
    debug: bool,
}

impl<Sch: Scheme> Config<Sch> {
    pub fn new(scheme: Sch) -> Self {
        Self {
            scheme,
            mode: Mode::default(),
            output: Output::default(),
            debug: false,
        }
    }

    pub fn with_scheme(mut self, scheme: Sch) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether the trace matrix must be materialized during the fill.
    pub fn needs_trace(&self) -> bool {
        self.debug || self.output >= Output::Begin
    }

    pub fn validate(&self) -> Result<()> {
        let (open, extend) = (gaps::Scorer::open(&self.scheme), gaps::Scorer::extend(&self.scheme));
        let zero = <Sch as Scheme>::Score::zero();
        ensure!(
            open <= zero && extend <= zero,
            "Gap penalties must be non-positive, got open={open:?} and extend={extend:?}"
        );
        Ok(())
    }
}

impl<S: Score, Symbol: PartialEq> Config<SimpleScheme<S, Symbol>> {
    /// Global alignment with unit edit costs: match 0, mismatch -1, gap -1. The score is the
    /// negated Levenshtein distance.
    pub fn edit() -> Self {
        let zero = S::zero();
        let minus_one = zero - S::one();
        Self::new(compose(
            symbols::Equality::new(zero, minus_one),
            gaps::Affine::linear(minus_one),
        ))
    }

    /// Fixed match/mismatch scores with affine gaps, a gap of length k costs `open + k * extend`.
    pub fn affine(matched: S, mismatched: S, open: S, extend: S) -> Self {
        Self::new(compose(
            symbols::Equality::new(matched, mismatched),
            gaps::Affine::new(open, extend),
        ))
    }
}
