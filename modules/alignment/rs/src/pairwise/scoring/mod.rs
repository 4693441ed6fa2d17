pub use delegate::Delegate;

pub use seqalign_core_rs::num::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol: PartialEq;
}

/// The most common scheme: fixed match/mismatch scores and affine gaps.
pub type SimpleScheme<S, Symbol> = Delegate<S, Symbol, symbols::Equality<S, Symbol>, gaps::Affine<S>>;

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    Symbol: PartialEq,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
