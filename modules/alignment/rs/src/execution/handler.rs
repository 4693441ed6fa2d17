use std::sync::Arc;

use derive_more::From;
use eyre::Result;

use crate::execution::{ExecutionHandler, Parallel, Sequential};
use crate::pairwise::Algorithm;

/// Either handler behind one type, picked at runtime.
#[derive(From)]
pub enum Handler<Out> {
    Sequential(Sequential),
    Parallel(Parallel<Out>),
}

impl<Item, Alg> ExecutionHandler<Item, Alg> for Handler<Alg::Output>
where
    Item: Send + 'static,
    Alg: Algorithm<Item> + Send + Sync + 'static,
    Alg::Output: Send + 'static,
{
    fn next<I>(&mut self, source: &mut I, algorithm: &Arc<Alg>) -> Option<Result<Alg::Output>>
    where
        I: Iterator<Item = Item>,
    {
        match self {
            Handler::Sequential(handler) => handler.next(source, algorithm),
            Handler::Parallel(handler) => handler.next(source, algorithm),
        }
    }
}
