use eyre::Result;

use crate::execution::{AlgorithmExecutor, Handler, Parallel, ResultRange, Sequential};
use crate::pairwise::scoring::Scheme;
use crate::pairwise::{Aligner, AlignmentResult, Config, WorkItem};
use crate::Alignable;

/// Where alignments are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    /// On the consuming thread, one pair per requested result.
    #[default]
    Sequential,
    /// On a dedicated worker pool. `threads` follows `parallelism::available` semantics,
    /// `capacity` bounds the number of pairs in flight (4 per thread if not set).
    Parallel {
        threads: isize,
        capacity: Option<usize>,
    },
}

/// Executor type behind the range returned by [`align_pairwise`].
pub type PairwiseExecutor<I, Id, Sch> =
    AlgorithmExecutor<I, Aligner<Sch>, Handler<AlignmentResult<Id, <Sch as Scheme>::Score>>>;

/// Align every pair of the input and return a lazy, single-pass range of results in input
/// order. Nothing is computed until the range is advanced.
pub fn align_pairwise<P, Id, Q, D, Sch>(
    pairs: P,
    config: Config<Sch>,
    execution: Execution,
) -> Result<ResultRange<PairwiseExecutor<P::IntoIter, Id, Sch>>>
where
    P: IntoIterator<Item = WorkItem<Id, Q, D>>,
    Id: Send + 'static,
    Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + Send + 'static,
    D: Alignable<Symbol = <Sch as Scheme>::Symbol> + Send + 'static,
    Sch: Scheme + Send + Sync + 'static,
{
    let aligner = Aligner::new(config)?;
    let handler = match execution {
        Execution::Sequential => Handler::from(Sequential),
        Execution::Parallel { threads, capacity } => Handler::from(match capacity {
            Some(capacity) => Parallel::new(threads, capacity)?,
            None => Parallel::with_threads(threads)?,
        }),
    };
    log::debug!("Pairwise alignment with {execution:?} execution");

    Ok(ResultRange::new(AlgorithmExecutor::new(pairs, aligner, handler)))
}
