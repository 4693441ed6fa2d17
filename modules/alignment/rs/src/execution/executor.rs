use std::iter::Fuse;
use std::sync::Arc;

use eyre::Result;

use crate::execution::{ExecutionHandler, Executor};
use crate::pairwise::Algorithm;

/// Pairs each work item with the algorithm and hands it to the execution handler.
pub struct AlgorithmExecutor<I, Alg, H>
where
    I: Iterator,
    Alg: Algorithm<I::Item>,
    H: ExecutionHandler<I::Item, Alg>,
{
    // Drop order matters: stop the input first, then let the handler drain in-flight work
    source: Fuse<I>,
    handler: H,
    algorithm: Arc<Alg>,
}

impl<I, Alg, H> AlgorithmExecutor<I, Alg, H>
where
    I: Iterator,
    Alg: Algorithm<I::Item>,
    H: ExecutionHandler<I::Item, Alg>,
{
    pub fn new(source: impl IntoIterator<IntoIter = I>, algorithm: Alg, handler: H) -> Self {
        Self::with_shared(source, Arc::new(algorithm), handler)
    }

    /// Same as `new`, but the algorithm may be shared with other executors.
    pub fn with_shared(source: impl IntoIterator<IntoIter = I>, algorithm: Arc<Alg>, handler: H) -> Self {
        Self {
            source: source.into_iter().fuse(),
            handler,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> &Alg {
        &self.algorithm
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<I, Alg, H> Executor for AlgorithmExecutor<I, Alg, H>
where
    I: Iterator,
    Alg: Algorithm<I::Item>,
    H: ExecutionHandler<I::Item, Alg>,
{
    type Output = Alg::Output;

    fn next_result(&mut self) -> Option<Result<Self::Output>> {
        self.handler.next(&mut self.source, &self.algorithm)
    }
}
