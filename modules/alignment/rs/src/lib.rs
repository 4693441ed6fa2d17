pub use alignable::Alignable;
pub use align::{align_pairwise, Execution, PairwiseExecutor};

mod align;
mod alignable;
pub mod execution;
pub mod pairwise;
