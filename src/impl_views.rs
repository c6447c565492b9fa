// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::imp_prelude::*;
use crate::iterators::{OuterIter, OuterIterMut};

/// # Methods for producing views
///
/// A view covers one stripe along the outermost axis: it has the array's
/// shape with the outermost extent removed, and all the common access
/// methods at that reduced rank, relative to the stripe. These methods are
/// the only way to obtain a view; views have no public constructor.
impl<A, S, Sh> ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: RemoveOuter,
{
    /// Return a cursor view positioned on the first stripe of the
    /// outermost axis.
    ///
    /// ```
    /// use ndfixed::{Array, Rank2};
    ///
    /// let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let mut row = a.outer_begin();
    /// assert_eq!(row.as_slice(), &[1, 2, 3]);
    /// row.advance();
    /// assert_eq!(row.as_slice(), &[4, 5, 6]);
    /// ```
    pub fn outer_begin(&self) -> ArrayView<'_, A, Sh::Smaller> {
        ArrayBase::from_data_offset(ViewRepr(self.storage()), self.offset)
    }

    /// Return a cursor view positioned one past the last stripe of the
    /// outermost axis.
    ///
    /// The returned view addresses no elements until it is moved back
    /// with [`retreat`](ArrayBase::retreat); accessing through it before
    /// that is a caller error (checked access reports
    /// [`ErrorKind::OutOfBounds`], panicking access panics).
    pub fn outer_end(&self) -> ArrayView<'_, A, Sh::Smaller> {
        ArrayBase::from_data_offset(ViewRepr(self.storage()), self.offset + Sh::SIZE)
    }

    /// Return a read-write cursor view positioned on the first stripe.
    // NOTE: Keep this in sync with the read-only version above.
    pub fn outer_begin_mut(&mut self) -> ArrayViewMut<'_, A, Sh::Smaller>
    where
        S: DataMut,
    {
        let offset = self.offset;
        ArrayBase::from_data_offset(ViewRepr(self.storage_mut()), offset)
    }

    /// Return a read-write cursor view positioned one past the last
    /// stripe.
    pub fn outer_end_mut(&mut self) -> ArrayViewMut<'_, A, Sh::Smaller>
    where
        S: DataMut,
    {
        let offset = self.offset + Sh::SIZE;
        ArrayBase::from_data_offset(ViewRepr(self.storage_mut()), offset)
    }

    /// Return a view of the stripe at position `index` along the
    /// outermost axis, or [`ErrorKind::OutOfBounds`] if `index` is not
    /// below the outermost extent.
    pub fn subview(&self, index: usize) -> Result<ArrayView<'_, A, Sh::Smaller>, ShapeError> {
        if index >= Sh::EXTENTS[0] {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        let offset = self.offset + index * Sh::STRIDES[0];
        Ok(ArrayBase::from_data_offset(ViewRepr(self.storage()), offset))
    }

    /// Return an iterator that traverses the outermost axis and yields
    /// each stripe as a view; double-ended and exact-size.
    ///
    /// Iterator element type is `ArrayView<'_, A, Sh::Smaller>`. Unlike a
    /// cursor from [`outer_begin`](ArrayBase::outer_begin), each yielded
    /// view borrows exactly its own stripe.
    pub fn outer_iter(&self) -> OuterIter<'_, A, Sh::Smaller> {
        OuterIter::new(self.as_slice(), Sh::EXTENTS[0])
    }

    /// Return an iterator that traverses the outermost axis and yields
    /// each stripe as a read-write view.
    ///
    /// Iterator element type is `ArrayViewMut<'_, A, Sh::Smaller>`.
    pub fn outer_iter_mut(&mut self) -> OuterIterMut<'_, A, Sh::Smaller>
    where
        S: DataMut,
    {
        OuterIterMut::new(self.as_slice_mut(), Sh::EXTENTS[0])
    }
}

/// # Methods for read-only cursor views
impl<'a, A, Sh> ArrayBase<ViewRepr<&'a [A]>, Sh>
where
    Sh: Shape,
{
    /// Move the cursor forward by one stripe (the owner's outermost
    /// stride, which equals this view's own element count).
    ///
    /// No bounds are checked; a cursor walked past the owner's storage is
    /// a caller error, caught by the next access: checked access reports
    /// [`ErrorKind::OutOfBounds`](crate::ErrorKind::OutOfBounds),
    /// panicking access panics, and [`uget`](ArrayBase::uget) keeps its
    /// usual `unsafe` contract.
    // NOTE: Keep this impl block in sync with the read-write version below.
    pub fn advance(&mut self) {
        self.offset = self.offset.wrapping_add(Sh::SIZE);
    }

    /// Move the cursor backward by one stripe.
    ///
    /// Unchecked exactly like [`advance`](ArrayBase::advance); retreating
    /// an end cursor onto the last stripe is the intended use.
    pub fn retreat(&mut self) {
        self.offset = self.offset.wrapping_sub(Sh::SIZE);
    }
}

/// # Methods for read-write cursor views
impl<'a, A, Sh> ArrayBase<ViewRepr<&'a mut [A]>, Sh>
where
    Sh: Shape,
{
    /// Move the cursor forward by one stripe.
    ///
    /// See [`advance`](ArrayBase::advance) on the read-only cursor for
    /// the contract.
    pub fn advance(&mut self) {
        self.offset = self.offset.wrapping_add(Sh::SIZE);
    }

    /// Move the cursor backward by one stripe.
    pub fn retreat(&mut self) {
        self.offset = self.offset.wrapping_sub(Sh::SIZE);
    }
}
