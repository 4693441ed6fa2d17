//! Pull-based execution of an algorithm over a stream of work items.
//!
//! An [`AlgorithmExecutor`] owns the input iterator, the algorithm and an [`ExecutionHandler`]
//! deciding where invocations run. Results are always produced in submission order and are
//! consumed through a [`ResultRange`].

use std::sync::Arc;

use eyre::Result;

pub use executor::AlgorithmExecutor;
pub use handler::Handler;
pub use parallel::Parallel;
pub use range::{Cursor, End, IntoIter, ResultRange};
pub use sequential::Sequential;

use crate::pairwise::Algorithm;

mod executor;
mod handler;
mod parallel;
mod range;
mod sequential;

/// Source of results. `None` means the input is exhausted and all work is drained; once
/// returned, it is returned for all subsequent calls.
pub trait Executor {
    type Output;

    fn next_result(&mut self) -> Option<Result<Self::Output>>;
}

/// Scheduling strategy for algorithm invocations.
pub trait ExecutionHandler<Item, Alg: Algorithm<Item>> {
    /// Produce the next result in submission order, pulling new items from `source` if needed.
    fn next<I>(&mut self, source: &mut I, algorithm: &Arc<Alg>) -> Option<Result<Alg::Output>>
    where
        I: Iterator<Item = Item>;
}
