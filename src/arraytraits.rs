// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::hash;
use core::ops::{Index, IndexMut};

use crate::imp_prelude::*;
use crate::iterators::{IntoIter, Iter, IterMut};

/// Access the element at the flat `offset`.
///
/// **Panics** if the offset is out of bounds. The genuinely unchecked
/// path is [`uget`](ArrayBase::uget).
impl<A, S, Sh> Index<usize> for ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    type Output = A;

    #[inline]
    fn index(&self, offset: usize) -> &A {
        &self.as_slice()[offset]
    }
}

/// Access the element at the flat `offset` mutably.
///
/// **Panics** if the offset is out of bounds.
impl<A, S, Sh> IndexMut<usize> for ArrayBase<S, Sh>
where
    S: DataMut<Elem = A>,
    Sh: Shape,
{
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut A {
        &mut self.as_slice_mut()[offset]
    }
}

/// Return `true` if the corresponding elements of the two values are
/// equal.
///
/// The shapes always agree: they are the same type parameter. Owners and
/// views compare freely with each other.
impl<A, B, S, S2, Sh> PartialEq<ArrayBase<S2, Sh>> for ArrayBase<S, Sh>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    Sh: Shape,
{
    fn eq(&self, rhs: &ArrayBase<S2, Sh>) -> bool {
        self.as_slice() == rhs.as_slice()
    }
}

impl<A, S, Sh> Eq for ArrayBase<S, Sh>
where
    A: Eq,
    S: Data<Elem = A>,
    Sh: Shape,
{
}

impl<A, S, Sh> hash::Hash for ArrayBase<S, Sh>
where
    A: hash::Hash,
    S: Data<Elem = A>,
    Sh: Shape,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

/// Create an owned array with every element default-initialized, like
/// [`new`](ArrayBase::new).
impl<A, S, Sh> Default for ArrayBase<S, Sh>
where
    A: Default,
    S: DataOwned<Elem = A>,
    Sh: Shape,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A deep copy: the clone owns or borrows storage exactly as `self` does,
/// and for owned arrays the buffers are independent.
impl<S, Sh> Clone for ArrayBase<S, Sh>
where
    S: Data + Clone,
    Sh: Shape,
{
    fn clone(&self) -> Self {
        ArrayBase::from_data_offset(self.data.clone(), self.offset)
    }
}

impl<A, S, Sh> AsRef<[A]> for ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    fn as_ref(&self) -> &[A] {
        self.as_slice()
    }
}

impl<A, S, Sh> AsMut<[A]> for ArrayBase<S, Sh>
where
    S: DataMut<Elem = A>,
    Sh: Shape,
{
    fn as_mut(&mut self) -> &mut [A] {
        self.as_slice_mut()
    }
}

impl<'a, A: 'a, S, Sh> IntoIterator for &'a ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: 'a, S, Sh> IntoIterator for &'a mut ArrayBase<S, Sh>
where
    S: DataMut<Elem = A>,
    Sh: Shape,
{
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A, Sh> IntoIterator for Array<A, Sh>
where
    Sh: Shape,
{
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.data)
    }
}
