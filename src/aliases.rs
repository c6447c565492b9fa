//! Type aliases for common array kinds and ranks
//!

use crate::{ArrayBase, OwnedRepr, ViewRepr};
use crate::{Rank0, Rank1, Rank2, Rank3, Rank4, Rank5, Rank6};

/// An array that owns its storage.
///
/// The `Array<A, Sh>` is parameterized by `A` for the element type and
/// `Sh` for the shape.
///
/// It owns a contiguous buffer of exactly `Sh::SIZE` elements, allocated
/// at construction and never resized. `Clone` performs a deep copy into an
/// independent buffer; moving transfers the buffer.
///
/// [`ArrayBase`] documents the methods common to arrays and views.
pub type Array<A, Sh> = ArrayBase<OwnedRepr<A>, Sh>;

/// A read-only view of one stripe of another array's storage.
///
/// A view produced by [`outer_begin`](ArrayBase::outer_begin) and friends
/// has the owner's shape with the outermost extent removed, and supports
/// the same access methods at that reduced rank, relative to its stripe.
/// The [`advance`](ArrayBase::advance) and [`retreat`](ArrayBase::retreat)
/// cursor methods move it a whole stripe at a time.
///
/// The borrow of the owner keeps the owner's storage alive for the
/// lifetime `'a`; a dangling view is a compile error.
pub type ArrayView<'a, A, Sh> = ArrayBase<ViewRepr<&'a [A]>, Sh>;

/// A read-write view of one stripe of another array's storage.
///
/// Like [`ArrayView`], plus the mutating access methods; it borrows the
/// owner exclusively.
pub type ArrayViewMut<'a, A, Sh> = ArrayBase<ViewRepr<&'a mut [A]>, Sh>;

/// zero-dimensional (scalar) array
pub type Array0<A> = Array<A, Rank0>;
/// one-dimensional array
pub type Array1<A, const N: usize> = Array<A, Rank1<N>>;
/// two-dimensional array
pub type Array2<A, const M: usize, const N: usize> = Array<A, Rank2<M, N>>;
/// three-dimensional array
pub type Array3<A, const M: usize, const N: usize, const P: usize> = Array<A, Rank3<M, N, P>>;
/// four-dimensional array
pub type Array4<A, const M: usize, const N: usize, const P: usize, const Q: usize> =
    Array<A, Rank4<M, N, P, Q>>;
/// five-dimensional array
pub type Array5<
    A,
    const M: usize,
    const N: usize,
    const P: usize,
    const Q: usize,
    const R: usize,
> = Array<A, Rank5<M, N, P, Q, R>>;
/// six-dimensional array
pub type Array6<
    A,
    const M: usize,
    const N: usize,
    const P: usize,
    const Q: usize,
    const R: usize,
    const S: usize,
> = Array<A, Rank6<M, N, P, Q, R, S>>;

/// zero-dimensional array view
pub type ArrayView0<'a, A> = ArrayView<'a, A, Rank0>;
/// one-dimensional array view
pub type ArrayView1<'a, A, const N: usize> = ArrayView<'a, A, Rank1<N>>;
/// two-dimensional array view
pub type ArrayView2<'a, A, const M: usize, const N: usize> = ArrayView<'a, A, Rank2<M, N>>;
/// three-dimensional array view
pub type ArrayView3<'a, A, const M: usize, const N: usize, const P: usize> =
    ArrayView<'a, A, Rank3<M, N, P>>;

/// zero-dimensional read-write array view
pub type ArrayViewMut0<'a, A> = ArrayViewMut<'a, A, Rank0>;
/// one-dimensional read-write array view
pub type ArrayViewMut1<'a, A, const N: usize> = ArrayViewMut<'a, A, Rank1<N>>;
/// two-dimensional read-write array view
pub type ArrayViewMut2<'a, A, const M: usize, const N: usize> = ArrayViewMut<'a, A, Rank2<M, N>>;
/// three-dimensional read-write array view
pub type ArrayViewMut3<'a, A, const M: usize, const N: usize, const P: usize> =
    ArrayViewMut<'a, A, Rank3<M, N, P>>;
