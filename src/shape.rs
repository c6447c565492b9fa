// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type-level array shapes.
//!
//! A shape is an ordered list of axis extents, written as const generic
//! parameters of a marker type: `Rank2<2, 3>` is the shape 2 × 3. Rank,
//! element count and row-major strides are associated constants of the
//! [`Shape`] impl, so they are evaluated once, when the type is
//! instantiated, and cost nothing at run time.

use crate::error::{from_kind, ErrorKind, ShapeError};

/// A compile-time array shape.
///
/// Implemented by the rank markers [`Rank0`] … [`Rank6`] and sealed; the
/// arrays and views of this crate are the only consumers.
///
/// The constants obey `SIZE == EXTENTS.iter().product()` (the empty
/// product is 1) and `STRIDES[k] == EXTENTS[k + 1..].iter().product()`,
/// which is the row-major layout: the last axis is contiguous.
pub trait Shape {
    /// Number of axes.
    const RANK: usize;
    /// Total number of elements, the product of all extents.
    const SIZE: usize;
    /// The axis extents, outermost first.
    const EXTENTS: &'static [usize];
    /// Elements spanned by one step along each axis.
    const STRIDES: &'static [usize];

    /// Convert a full multi-index into a flat offset into row-major
    /// storage.
    ///
    /// The number of indices must equal `RANK` exactly (never truncated
    /// or padded) or the result is [`ErrorKind::RankMismatch`]. Each
    /// index must be within its axis extent or the result is
    /// [`ErrorKind::OutOfBounds`]. The arity check runs first, so a call
    /// that is wrong in both ways reports `RankMismatch`.
    fn flatten(index: &[usize]) -> Result<usize, ShapeError> {
        if index.len() != Self::RANK {
            return Err(from_kind(ErrorKind::RankMismatch));
        }
        let mut offset = 0;
        for (k, &i) in index.iter().enumerate() {
            if i >= Self::EXTENTS[k] {
                return Err(from_kind(ErrorKind::OutOfBounds));
            }
            offset += i * Self::STRIDES[k];
        }
        Ok(offset)
    }

    /// Split a flat offset back into one index per axis, the inverse of
    /// [`flatten`](Shape::flatten).
    ///
    /// `index.len()` must equal `RANK` and `offset` must be below `SIZE`.
    fn unflatten_into(offset: usize, index: &mut [usize]) -> Result<(), ShapeError> {
        if index.len() != Self::RANK {
            return Err(from_kind(ErrorKind::RankMismatch));
        }
        if offset >= Self::SIZE {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        let mut rem = offset;
        for (k, i) in index.iter_mut().enumerate() {
            *i = rem / Self::STRIDES[k];
            rem %= Self::STRIDES[k];
        }
        Ok(())
    }

    private_decl! {}
}

/// A shape with a next smaller shape.
///
/// `RemoveOuter` defines a larger-than relation for shapes: removing the
/// outermost axis of `Self` gives the smaller shape [`Smaller`], which is
/// the shape of the views produced by an array of shape `Self`.
///
/// The outer stride equals the smaller shape's size
/// (`Self::STRIDES[0] == Self::Smaller::SIZE`); a view's cursor steps by
/// exactly that many elements.
///
/// [`Smaller`]: RemoveOuter::Smaller
pub trait RemoveOuter: Shape {
    /// The shape with the outermost extent removed.
    type Smaller: Shape;
}

/// The rank-0 (scalar) shape. It has one element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank0;

/// One-dimensional shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank1<const A: usize>;

/// Two-dimensional shapes, `A` rows of `B` elements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank2<const A: usize, const B: usize>;

/// Three-dimensional shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank3<const A: usize, const B: usize, const C: usize>;

/// Four-dimensional shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank4<const A: usize, const B: usize, const C: usize, const D: usize>;

/// Five-dimensional shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank5<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize>;

/// Six-dimensional shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rank6<
    const A: usize,
    const B: usize,
    const C: usize,
    const D: usize,
    const E: usize,
    const F: usize,
>;

impl Shape for Rank0 {
    const RANK: usize = 0;
    const SIZE: usize = 1;
    const EXTENTS: &'static [usize] = &[];
    const STRIDES: &'static [usize] = &[];
    private_impl! {}
}

impl<const A: usize> Shape for Rank1<A> {
    const RANK: usize = 1;
    const SIZE: usize = A;
    const EXTENTS: &'static [usize] = &[A];
    const STRIDES: &'static [usize] = &[1];
    private_impl! {}
}

impl<const A: usize, const B: usize> Shape for Rank2<A, B> {
    const RANK: usize = 2;
    const SIZE: usize = A * B;
    const EXTENTS: &'static [usize] = &[A, B];
    const STRIDES: &'static [usize] = &[B, 1];
    private_impl! {}
}

impl<const A: usize, const B: usize, const C: usize> Shape for Rank3<A, B, C> {
    const RANK: usize = 3;
    const SIZE: usize = A * B * C;
    const EXTENTS: &'static [usize] = &[A, B, C];
    const STRIDES: &'static [usize] = &[B * C, C, 1];
    private_impl! {}
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> Shape for Rank4<A, B, C, D> {
    const RANK: usize = 4;
    const SIZE: usize = A * B * C * D;
    const EXTENTS: &'static [usize] = &[A, B, C, D];
    const STRIDES: &'static [usize] = &[B * C * D, C * D, D, 1];
    private_impl! {}
}

impl<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize> Shape
    for Rank5<A, B, C, D, E>
{
    const RANK: usize = 5;
    const SIZE: usize = A * B * C * D * E;
    const EXTENTS: &'static [usize] = &[A, B, C, D, E];
    const STRIDES: &'static [usize] = &[B * C * D * E, C * D * E, D * E, E, 1];
    private_impl! {}
}

impl<
        const A: usize,
        const B: usize,
        const C: usize,
        const D: usize,
        const E: usize,
        const F: usize,
    > Shape for Rank6<A, B, C, D, E, F>
{
    const RANK: usize = 6;
    const SIZE: usize = A * B * C * D * E * F;
    const EXTENTS: &'static [usize] = &[A, B, C, D, E, F];
    const STRIDES: &'static [usize] = &[B * C * D * E * F, C * D * E * F, D * E * F, E * F, F, 1];
    private_impl! {}
}

impl<const A: usize> RemoveOuter for Rank1<A> {
    type Smaller = Rank0;
}

impl<const A: usize, const B: usize> RemoveOuter for Rank2<A, B> {
    type Smaller = Rank1<B>;
}

impl<const A: usize, const B: usize, const C: usize> RemoveOuter for Rank3<A, B, C> {
    type Smaller = Rank2<B, C>;
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> RemoveOuter
    for Rank4<A, B, C, D>
{
    type Smaller = Rank3<B, C, D>;
}

impl<const A: usize, const B: usize, const C: usize, const D: usize, const E: usize> RemoveOuter
    for Rank5<A, B, C, D, E>
{
    type Smaller = Rank4<B, C, D, E>;
}

impl<
        const A: usize,
        const B: usize,
        const C: usize,
        const D: usize,
        const E: usize,
        const F: usize,
    > RemoveOuter for Rank6<A, B, C, D, E, F>
{
    type Smaller = Rank5<B, C, D, E, F>;
}
