use eyre::{eyre, Result};
use higher_kinded_types::prelude::*;

use seqalign_core_rs::LendingIterator;

use crate::execution::Executor;

const DETACHED: &str = "No algorithm execution buffer available.";

/// Single-pass view over the results of an executor.
///
/// The range owns its executor and caches exactly one result: the one the cursor points to.
/// Advancing overwrites the cache, so references handed out by the cursor can't outlive the next
/// step. Taking the executor out leaves the range detached: accessing it reports an error
/// instead of pretending the range is exhausted. Iterators over a detached range yield that
/// error once and end.
pub struct ResultRange<E: Executor> {
    executor: Option<Box<E>>,
    cache: Option<E::Output>,
    exhausted: bool,
}

/// Past-the-end sentinel, cursors compare equal to it once the range is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct End;

impl<E: Executor> ResultRange<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor: Some(Box::new(executor)),
            cache: None,
            exhausted: false,
        }
    }

    /// Return a cursor pointing at the current result. The first call fetches it, later calls
    /// reuse the cached result instead of skipping it.
    pub fn begin(&mut self) -> Result<Cursor<'_, E>> {
        if self.cache.is_none() {
            self.fetch()?;
        }
        Ok(Cursor { range: self })
    }

    pub fn end(&self) -> End {
        End
    }

    pub fn is_detached(&self) -> bool {
        self.executor.is_none()
    }

    /// Take the executor out, leaving the range detached.
    pub fn detach(&mut self) -> Option<E> {
        self.cache = None;
        self.executor.take().map(|x| *x)
    }

    fn fetch(&mut self) -> Result<()> {
        let executor = self.executor.as_mut().ok_or_else(|| eyre!(DETACHED))?;

        self.cache = None;
        if self.exhausted {
            return Ok(());
        }
        match executor.next_result() {
            None => self.exhausted = true,
            Some(result) => self.cache = Some(result?),
        }
        Ok(())
    }
}

/// Position inside a [`ResultRange`].
pub struct Cursor<'a, E: Executor> {
    range: &'a mut ResultRange<E>,
}

impl<E: Executor> Cursor<'_, E> {
    /// Current result, `None` past the end or after a failed step.
    pub fn get(&self) -> Option<&E::Output> {
        self.range.cache.as_ref()
    }

    /// Step to the next result. A failed item is reported as an error, the cursor stays usable
    /// and the following step continues with the next item.
    pub fn advance(&mut self) -> Result<()> {
        self.range.fetch()
    }

    pub fn is_end(&self) -> bool {
        self.range.exhausted
    }
}

impl<E: Executor> PartialEq<End> for Cursor<'_, E> {
    fn eq(&self, _: &End) -> bool {
        self.is_end()
    }
}

impl<E: Executor> PartialEq<Cursor<'_, E>> for End {
    fn eq(&self, other: &Cursor<'_, E>) -> bool {
        other.is_end()
    }
}

impl<E: Executor> LendingIterator for ResultRange<E> {
    type Item = For!(<'a> = Result<&'a E::Output>);

    fn next(&mut self) -> Option<<Self::Item as ForLt>::Of<'_>> {
        if self.exhausted {
            return None;
        }
        match self.fetch() {
            Err(err) => {
                // Detached ranges report once, failed items don't end the range
                if self.is_detached() {
                    self.exhausted = true;
                }
                Some(Err(err))
            }
            Ok(()) => self.cache.as_ref().map(Ok),
        }
    }
}

/// Owning iterator over the remaining results.
pub struct IntoIter<E: Executor> {
    executor: Option<Box<E>>,
    cache: Option<E::Output>,
    detached: bool,
}

impl<E: Executor> Iterator for IntoIter<E> {
    type Item = Result<E::Output>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cached) = self.cache.take() {
            return Some(Ok(cached));
        }
        match self.executor.as_mut() {
            Some(executor) => executor.next_result(),
            None if self.detached => {
                self.detached = false;
                Some(Err(eyre!(DETACHED)))
            }
            None => None,
        }
    }
}

impl<E: Executor> IntoIterator for ResultRange<E> {
    type Item = Result<E::Output>;
    type IntoIter = IntoIter<E>;

    /// The cached result, if any, is yielded first.
    fn into_iter(self) -> Self::IntoIter {
        let detached = self.is_detached() && !self.exhausted;
        let executor = if self.exhausted { None } else { self.executor };
        IntoIter {
            executor,
            cache: self.cache,
            detached,
        }
    }
}
