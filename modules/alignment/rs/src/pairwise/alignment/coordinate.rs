use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

/// A cell of the alignment matrix. Rows follow the query, columns follow the database, and
/// cell (i, j) stands for the prefixes query[..i] and database[..j].
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}
