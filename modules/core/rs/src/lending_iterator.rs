use std::marker::PhantomData;

use ::impl_tools::autoimpl;
use derive_getters::Dissolve;
use derive_more::Constructor;
use higher_kinded_types::prelude::*;

/// An iterator whose items may borrow from the iterator itself. Each lent item stays valid
/// only until the next call to `next`, which is exactly the contract of single-pass,
/// caching result generators.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box <T>)]
pub trait LendingIterator {
    type Item: ForLt;

    fn next(&mut self) -> Option<<Self::Item as ForLt>::Of<'_>>;

    /// Transform every lent item. The dummy `&()` argument pins the lifetime of the item for
    /// the closure, otherwise the higher-ranked bound can't be inferred at the call site.
    fn map<Fun, Out>(self, f: Fun) -> Map<Self, Fun, Out>
    where
        Self: Sized,
        Out: ForLt,
        for<'iter> Fun:
            FnMut(&'iter (), <Self::Item as ForLt>::Of<'iter>) -> <Out as ForLt>::Of<'iter>,
    {
        Map::new(self, f, PhantomData)
    }

    /// Visit every remaining item, returning the number of visited items.
    fn for_each<Fun>(mut self, mut f: Fun) -> usize
    where
        Self: Sized,
        for<'iter> Fun: FnMut(&'iter (), <Self::Item as ForLt>::Of<'iter>),
    {
        let mut visited = 0;
        while let Some(item) = self.next() {
            f(&(), item);
            visited += 1;
        }
        visited
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Dissolve, Constructor)]
pub struct Map<I, Fun, Out> {
    iter: I,
    map: Fun,
    _phantom: PhantomData<Out>,
}

impl<I, Fun, Out> LendingIterator for Map<I, Fun, Out>
where
    I: LendingIterator,
    Out: ForLt,
    for<'iter> Fun: FnMut(
        &'iter (),
        <<I as LendingIterator>::Item as ForLt>::Of<'iter>,
    ) -> <Out as ForLt>::Of<'iter>,
{
    type Item = Out;

    fn next(&mut self) -> Option<<Self::Item as ForLt>::Of<'_>> {
        match self.iter.next() {
            None => None,
            Some(item) => Some((self.map)(&(), item)),
        }
    }
}
