// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

//! The `ndfixed` crate provides an *n*-dimensional container whose shape is
//! fixed at compile time.
//!
//! In a fixed-shape array every axis extent is a const generic parameter of
//! the type. Rank, total element count and per-axis strides are therefore
//! constants of the type, computed once at type-definition time and never
//! recomputed or stored per value.
//!
//! ## Highlights
//!
//! - Generic element type, shapes of rank 0 to 6 ([`Rank0`] … [`Rank6`]).
//! - Two-tier element access: checked multi-index access via [`at`] that
//!   reports [`ShapeError`], and unchecked flat-offset access via the
//!   `unsafe` [`uget`].
//! - Lightweight views ([`ArrayView`], [`ArrayViewMut`]) with the outermost
//!   axis removed, which borrow the owner's storage and walk it stripe by
//!   stripe. Because views borrow, an owner can never be dropped while a
//!   view into it is alive.
//! - Owning arrays have value semantics: `Clone` makes an independent deep
//!   copy, and moving transfers the storage.
//!
//! [`at`]: ArrayBase::at
//! [`uget`]: ArrayBase::uget
//!
//! ```
//! use ndfixed::{Array, Rank2};
//!
//! let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4, 5, 6]).unwrap();
//!
//! assert_eq!(a.len(), 6);
//! assert_eq!(*a.at(&[1, 2]).unwrap(), 6);
//!
//! // Walk the rows with a cursor view.
//! let mut row = a.outer_begin();
//! row.advance();
//! assert_eq!(row[1], *a.at(&[1, 1]).unwrap());
//! ```
//!
//! ## The shape is part of the type
//!
//! `Array<f64, Rank2<2, 3>>` and `Array<f64, Rank2<3, 2>>` are distinct
//! types; mixing them up is a compile error rather than a runtime shape
//! mismatch. The remaining runtime errors are the three in [`ErrorKind`]:
//! too many initializer elements, wrong number of indices, and an index
//! outside its axis.
//!
//! ## Crate feature flags
//!
//! - `std`: Rust standard library (enabled by default). The crate is
//!   `no_std` compatible with `alloc` otherwise.
//! - `approx`: implementations of the `approx` crate's comparison traits.

extern crate alloc;

#[macro_use]
mod private;

use core::marker::PhantomData;

pub use crate::aliases::*;
pub use crate::data_repr::{OwnedRepr, ViewRepr};
pub use crate::data_traits::{Data, DataMut, DataOwned};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::iterators::{IntoIter, Iter, IterMut, OuterIter, OuterIterMut};
pub use crate::shape::{Rank0, Rank1, Rank2, Rank3, Rank4, Rank5, Rank6};
pub use crate::shape::{RemoveOuter, Shape};

mod aliases;
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod data_traits;
mod error;
mod imp_prelude;
mod impl_constructors;
mod impl_methods;
mod impl_views;
mod iterators;
pub mod prelude;
mod shape;

/// An *n*-dimensional value with a compile-time shape, generic over how its
/// elements are stored.
///
/// `ArrayBase` is the one array type of this crate; everything else is a
/// type alias that fills in the storage parameter:
///
/// - [`Array`]: owns its storage (a contiguous buffer of exactly
///   `Sh::SIZE` elements).
/// - [`ArrayView`], [`ArrayViewMut`]: borrow storage from an `Array` and
///   select one contiguous stripe of it.
///
/// All variants share the same access methods; constructors exist only for
/// the owned variant, and reduced-rank views are produced only by
/// [`outer_begin`](ArrayBase::outer_begin) and its sibling methods.
///
/// `S` is one of the three storage representations ([`OwnedRepr`],
/// `ViewRepr<&[A]>`, `ViewRepr<&mut [A]>`); the [`Data`] trait family is
/// sealed, so no further representations can exist. `Sh` is the type-level
/// shape, one of [`Rank0`] … [`Rank6`].
pub struct ArrayBase<S, Sh>
where
    S: Data,
    Sh: Shape,
{
    /// Element storage: an owned buffer, or a borrow of some owner's buffer.
    data: S,
    /// Flat offset of this value's stripe into the storage.
    ///
    /// Always 0 for owned arrays. Views walk by whole stripes, so for an
    /// in-bounds view this is a multiple of `Sh::SIZE`.
    offset: usize,
    marker: PhantomData<Sh>,
}

impl<A, S, Sh> ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    /// Assemble from parts; every public entry point funnels through here.
    pub(crate) fn from_data_offset(data: S, offset: usize) -> Self {
        ArrayBase {
            data,
            offset,
            marker: PhantomData,
        }
    }

    /// The whole backing storage, not just this value's stripe.
    pub(crate) fn storage(&self) -> &[A] {
        self.data._data_slice()
    }

    pub(crate) fn storage_mut(&mut self) -> &mut [A]
    where
        S: DataMut,
    {
        self.data._data_slice_mut()
    }
}
