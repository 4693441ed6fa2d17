use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use eyre::{ensure, eyre, Result};
use rayon::ThreadPool;

use seqalign_core_rs::parallelism;

use crate::execution::ExecutionHandler;
use crate::pairwise::Algorithm;

// Outcome of one invocation as seen from the consumer side
type Slot<Out> = Receiver<thread::Result<Result<Out>>>;

/// Runs invocations on a rayon pool with at most `capacity` items in flight.
///
/// Every submitted item gets its own single-use completion slot. Results are handed out in
/// submission order: the consumer blocks on the slot of the oldest item, younger items keep
/// running in the meantime. Failures are re-raised at the position of the failed item, a worker
/// panic is resumed on the consumer thread.
pub struct Parallel<Out> {
    pool: Arc<ThreadPool>,
    capacity: usize,
    submitted: usize,
    pending: VecDeque<(usize, Slot<Out>)>,
}

impl<Out: Send + 'static> Parallel<Out> {
    /// `threads` follows `parallelism::available`: positive = exact, 0 = 1, negative = all but N.
    pub fn new(threads: isize, capacity: usize) -> Result<Self> {
        Self::with_pool(Arc::new(parallelism::pool(threads)?), capacity)
    }

    /// Default window: 4 items per worker thread.
    pub fn with_threads(threads: isize) -> Result<Self> {
        let pool = parallelism::pool(threads)?;
        let capacity = pool.current_num_threads() * 4;
        Self::with_pool(Arc::new(pool), capacity)
    }

    /// Run on an existing pool, e.g. shared between several executors.
    pub fn with_pool(pool: Arc<ThreadPool>, capacity: usize) -> Result<Self> {
        ensure!(capacity > 0, "Parallel execution requires a positive capacity");
        log::debug!(
            "Parallel execution: {} threads, up to {capacity} items in flight",
            pool.current_num_threads()
        );

        Ok(Self {
            pool,
            capacity,
            submitted: 0,
            pending: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Number of submitted items whose results were not consumed yet.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    fn submit<Item, Alg>(&mut self, item: Item, algorithm: &Arc<Alg>)
    where
        Item: Send + 'static,
        Alg: Algorithm<Item, Output = Out> + Send + Sync + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(1);
        let algorithm = Arc::clone(algorithm);
        let seqno = self.submitted;

        self.pool.spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| algorithm.run(item)));
            match &result {
                Err(_) => log::error!("Work item #{seqno} panicked"),
                Ok(Err(err)) => log::error!("Work item #{seqno} failed: {err}"),
                Ok(Ok(_)) => {}
            }
            // The slot is gone only if the consumer was torn down without draining
            let _ = sender.send(result);
        });

        self.pending.push_back((seqno, receiver));
        self.submitted += 1;
    }
}

impl<Item, Alg> ExecutionHandler<Item, Alg> for Parallel<Alg::Output>
where
    Item: Send + 'static,
    Alg: Algorithm<Item> + Send + Sync + 'static,
    Alg::Output: Send + 'static,
{
    fn next<I>(&mut self, source: &mut I, algorithm: &Arc<Alg>) -> Option<Result<Alg::Output>>
    where
        I: Iterator<Item = Item>,
    {
        while self.pending.len() < self.capacity {
            match source.next() {
                Some(item) => self.submit(item, algorithm),
                None => break,
            }
        }

        let (seqno, slot) = self.pending.pop_front()?;
        match slot.recv() {
            Ok(Ok(result)) => Some(result),
            Ok(Err(payload)) => panic::resume_unwind(payload),
            Err(_) => Some(Err(eyre!(
                "Worker dropped work item #{seqno} without reporting a result"
            ))),
        }
    }
}

impl<Out> Drop for Parallel<Out> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            log::debug!(
                "Waiting for {} in-flight work items before shutting down",
                self.pending.len()
            );
        }
        for (_, slot) in self.pending.drain(..) {
            let _ = slot.recv();
        }
    }
}
