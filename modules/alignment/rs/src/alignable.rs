use std::rc::Rc;
use std::sync::Arc;

// Random access sequence of symbols. Kept minimal on purpose: slices, strings and shared
// pointers to them are all that the alignment kernels need.
pub trait Alignable {
    type Symbol: PartialEq;

    fn len(&self) -> usize;
    fn at(&self, pos: usize) -> &Self::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: PartialEq, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: PartialEq> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

// Strings are aligned byte-wise
impl Alignable for str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

impl Alignable for String {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}

macro_rules! impl_for_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<A: Alignable + ?Sized> Alignable for $ptr<A> {
                type Symbol = A::Symbol;

                #[inline(always)]
                fn len(&self) -> usize {
                    (**self).len()
                }

                #[inline(always)]
                fn at(&self, pos: usize) -> &Self::Symbol {
                    (**self).at(pos)
                }
            }
        )*
    };
}

impl_for_pointer!(Box, Rc, Arc);

impl<A: Alignable + ?Sized> Alignable for &A {
    type Symbol = A::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        (**self).at(pos)
    }
}
