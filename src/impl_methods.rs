// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::imp_prelude::*;
use crate::iterators::{Iter, IterMut};

/// # Methods common to arrays and views
impl<A, S, Sh> ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    /// Return the total number of elements in the array.
    ///
    /// Equal to `Sh::SIZE`; constant for the type.
    pub fn len(&self) -> usize {
        Sh::SIZE
    }

    /// Return whether the array has no elements, i.e. some extent is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array.
    ///
    /// Equal to `Sh::RANK`; constant for the type.
    pub fn ndim(&self) -> usize {
        Sh::RANK
    }

    /// Return the shape of the array: the extents, outermost first.
    pub fn shape(&self) -> &'static [usize] {
        Sh::EXTENTS
    }

    /// Return the strides of the array.
    pub fn strides(&self) -> &'static [usize] {
        Sh::STRIDES
    }

    /// Return a reference to the element at `index`, or an error.
    ///
    /// The number of indices must equal the rank exactly (it is never
    /// truncated or padded): otherwise the result is
    /// [`ErrorKind::RankMismatch`]. Every index must be within its axis
    /// extent: otherwise the result is [`ErrorKind::OutOfBounds`].
    ///
    /// For a view, indices are relative to the view's own stripe.
    ///
    /// ```
    /// use ndfixed::{Array, Rank2};
    ///
    /// let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(*a.at(&[1, 2]).unwrap(), 6);
    /// assert!(a.at(&[0]).is_err());
    /// assert!(a.at(&[2, 0]).is_err());
    /// ```
    pub fn at(&self, index: &[usize]) -> Result<&A, ShapeError> {
        let within = Sh::flatten(index)?;
        self.offset
            .checked_add(within)
            .and_then(|i| self.storage().get(i))
            .ok_or_else(|| from_kind(ErrorKind::OutOfBounds))
    }

    /// Return a mutable reference to the element at `index`, or an error.
    ///
    /// Errors exactly like [`at`](ArrayBase::at).
    pub fn at_mut(&mut self, index: &[usize]) -> Result<&mut A, ShapeError>
    where
        S: DataMut,
    {
        let within = Sh::flatten(index)?;
        let i = self
            .offset
            .checked_add(within)
            .ok_or_else(|| from_kind(ErrorKind::OutOfBounds))?;
        self.storage_mut()
            .get_mut(i)
            .ok_or_else(|| from_kind(ErrorKind::OutOfBounds))
    }

    /// Return a reference to the element at flat `offset`, without any
    /// bounds checking.
    ///
    /// The checked counterpart of this unchecked tier is indexing
    /// (`array[offset]`), which panics when out of bounds.
    ///
    /// # Safety
    ///
    /// `offset` must be less than `self.len()`, and a view must not have
    /// been walked outside its owner's storage with
    /// [`advance`]/[`retreat`].
    ///
    /// [`advance`]: ArrayBase::advance
    /// [`retreat`]: ArrayBase::retreat
    #[inline]
    pub unsafe fn uget(&self, offset: usize) -> &A {
        debug_assert!(offset < Sh::SIZE);
        self.storage().get_unchecked(self.offset + offset)
    }

    /// Return a mutable reference to the element at flat `offset`,
    /// without any bounds checking.
    ///
    /// # Safety
    ///
    /// As for [`uget`](ArrayBase::uget).
    #[inline]
    pub unsafe fn uget_mut(&mut self, offset: usize) -> &mut A
    where
        S: DataMut,
    {
        debug_assert!(offset < Sh::SIZE);
        let i = self.offset + offset;
        self.storage_mut().get_unchecked_mut(i)
    }

    /// Return the array's elements as a slice, in flattening order.
    ///
    /// For a view this is just the view's own stripe.
    ///
    /// **Panics** if the value is a view whose cursor has been walked
    /// outside its owner's storage.
    pub fn as_slice(&self) -> &[A] {
        &self.storage()[self.offset..self.offset + Sh::SIZE]
    }

    /// Return the array's elements as a mutable slice, in flattening
    /// order.
    ///
    /// **Panics** like [`as_slice`](ArrayBase::as_slice).
    pub fn as_slice_mut(&mut self) -> &mut [A]
    where
        S: DataMut,
    {
        let offset = self.offset;
        &mut self.storage_mut()[offset..offset + Sh::SIZE]
    }

    /// Return an iterator of references to the elements of the array, in
    /// flattening order.
    ///
    /// The iterator is double-ended, so it walks backwards with
    /// [`Iterator::rev`].
    ///
    /// Iterator element type is `&A`.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self.as_slice())
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in flattening order; double-ended like
    /// [`iter`](ArrayBase::iter).
    ///
    /// Iterator element type is `&mut A`.
    pub fn iter_mut(&mut self) -> IterMut<'_, A>
    where
        S: DataMut,
    {
        IterMut::new(self.as_slice_mut())
    }

    /// Return an owned array with a copy of this value's elements.
    pub fn to_owned(&self) -> Array<A, Sh>
    where
        A: Clone,
    {
        ArrayBase::from_data_offset(OwnedRepr::from_vec(self.as_slice().to_vec()), 0)
    }

    /// Return a read-only view of the whole value, at the same rank.
    pub fn view(&self) -> ArrayView<'_, A, Sh> {
        ArrayBase::from_data_offset(ViewRepr(self.storage()), self.offset)
    }

    /// Return a read-write view of the whole value, at the same rank.
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, A, Sh>
    where
        S: DataMut,
    {
        let offset = self.offset;
        ArrayBase::from_data_offset(ViewRepr(self.storage_mut()), offset)
    }

    /// Set every element to `x`.
    pub fn fill(&mut self, x: A)
    where
        S: DataMut,
        A: Clone,
    {
        self.as_slice_mut().fill(x);
    }

    /// Swap the elements at flat offsets `a` and `b`.
    ///
    /// **Panics** if an offset is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize)
    where
        S: DataMut,
    {
        self.as_slice_mut().swap(a, b)
    }
}
