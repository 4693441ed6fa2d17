use std::sync::Arc;

use eyre::Result;

use crate::execution::ExecutionHandler;
use crate::pairwise::Algorithm;

/// Runs every invocation on the calling thread, one item per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl<Item, Alg: Algorithm<Item>> ExecutionHandler<Item, Alg> for Sequential {
    #[inline]
    fn next<I>(&mut self, source: &mut I, algorithm: &Arc<Alg>) -> Option<Result<Alg::Output>>
    where
        I: Iterator<Item = Item>,
    {
        source.next().map(|item| algorithm.run(item))
    }
}
