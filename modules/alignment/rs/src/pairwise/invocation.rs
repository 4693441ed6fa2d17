use std::cell::RefCell;

use derive_getters::Dissolve;
use derive_more::{Constructor, From};
use eyre::Result;
use thread_local::ThreadLocal;

use crate::pairwise::alignment::Coordinate;
use crate::pairwise::config::{Config, Output};
use crate::pairwise::dp::{Best, Corner, FullScan, Mode, Storage, Tracers};
use crate::pairwise::matrix::{DenseScoreMatrix, TraceMatrix};
use crate::pairwise::result::AlignmentResult;
use crate::pairwise::scoring::Scheme;
use crate::pairwise::traceback::traceback;
use crate::Alignable;

/// A pair of sequences to align plus a caller-defined correlation id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Constructor, Dissolve, From)]
pub struct WorkItem<Id, Q, D> {
    pub id: Id,
    pub query: Q,
    pub database: D,
}

/// One unit of work: turns an input item into an output value.
pub trait Algorithm<Item> {
    type Output;

    fn run(&self, item: Item) -> Result<Self::Output>;
}

impl<Item, Out, F> Algorithm<Item> for F
where
    F: Fn(Item) -> Result<Out>,
{
    type Output = Out;

    fn run(&self, item: Item) -> Result<Out> {
        self(item)
    }
}

/// Pairwise aligner shared by all workers. DP buffers are cached per thread and reused
/// between invocations.
pub struct Aligner<Sch: Scheme> {
    config: Config<Sch>,
    scans: ThreadLocal<RefCell<FullScan<<Sch as Scheme>::Score>>>,
}

impl<Sch: Scheme> Aligner<Sch> {
    pub fn new(config: Config<Sch>) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Pairwise aligner: mode={:?}, output={:?}, debug={}",
            config.mode(),
            config.output(),
            config.debug()
        );

        Ok(Self {
            config,
            scans: ThreadLocal::new(),
        })
    }

    pub fn config(&self) -> &Config<Sch> {
        &self.config
    }

    pub fn align<Id, Q, D>(&self, id: Id, query: &Q, database: &D) -> AlignmentResult<Id, <Sch as Scheme>::Score>
    where
        Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
        D: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
    {
        log::trace!("Aligning {} x {} symbols", query.len(), database.len());
        match self.config.mode() {
            Mode::Global => self.run_with(Corner::default(), id, query, database),
            Mode::Local => self.run_with(Best::default(), id, query, database),
        }
    }

    fn run_with<St, Id, Q, D>(
        &self,
        storage: St,
        id: Id,
        query: &Q,
        database: &D,
    ) -> AlignmentResult<Id, <Sch as Scheme>::Score>
    where
        St: Storage<<Sch as Scheme>::Score>,
        Q: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
        D: Alignable<Symbol = <Sch as Scheme>::Symbol> + ?Sized,
    {
        let (mode, output, debug) = (*self.config.mode(), *self.config.output(), *self.config.debug());

        let mut tracers = Tracers::new(
            storage,
            debug.then(DenseScoreMatrix::default),
            self.config.needs_trace().then(TraceMatrix::default),
        );
        self.scans
            .get_or(|| RefCell::new(FullScan::default()))
            .borrow_mut()
            .scan(query, database, self.config.scheme(), mode, &mut tracers);

        let (storage, scores, traces, _) = tracers.dissolve();
        let seed = storage.finalize();
        let end = Coordinate::new(seed.row, seed.col);

        let alignment = match (&traces, output >= Output::Begin) {
            (Some(traces), true) => Some(traceback(traces, query, database, end, mode)),
            _ => None,
        };

        AlignmentResult::new(id, seed.score)
            .with_end((output >= Output::End).then_some(end))
            .with_alignment(alignment, output >= Output::Alignment)
            .with_matrices(scores, if debug { traces } else { None })
    }
}

impl<Sch, Id, Q, D> Algorithm<WorkItem<Id, Q, D>> for Aligner<Sch>
where
    Sch: Scheme,
    Q: Alignable<Symbol = <Sch as Scheme>::Symbol>,
    D: Alignable<Symbol = <Sch as Scheme>::Symbol>,
{
    type Output = AlignmentResult<Id, <Sch as Scheme>::Score>;

    fn run(&self, item: WorkItem<Id, Q, D>) -> Result<Self::Output> {
        let (id, query, database) = item.dissolve();
        Ok(self.align(id, &query, &database))
    }
}
