use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Translate the requested number of worker threads into an actual one:
/// * positive values are taken as is but never exceed the number of available cores;
/// * zero means a single thread;
/// * negative values mean "all cores but N", e.g. -1 is all available cores.
fn _normalize(requested: isize, max: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (max + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(max) as usize,
    }
}

pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()
        .wrap_err("Failed to query the available parallelism")?
        .get() as isize;
    Ok(_normalize(requested, max))
}

/// Build a dedicated worker pool with `available(requested)` threads.
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|ind| format!("seqalign-worker-{ind}"))
        .build()
        .wrap_err_with(|| format!("Failed to start a worker pool with {threads} threads"))?;

    log::debug!("Started a worker pool with {threads} threads (requested: {requested})");
    Ok(pool)
}
