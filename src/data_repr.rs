use alloc::boxed::Box;
use alloc::vec::Vec;

/// Array's representation: owned storage.
///
/// A fixed-length contiguous buffer; the length always equals the shape's
/// `SIZE`, which the constructors enforce.
///
/// *Don’t use this type directly—use the type alias
/// [`Array`](crate::Array) for the array type!*
#[derive(Debug)]
pub struct OwnedRepr<A>(pub(crate) Box<[A]>);

impl<A> OwnedRepr<A> {
    pub(crate) fn from_vec(v: Vec<A>) -> Self {
        OwnedRepr(v.into_boxed_slice())
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        self.0.into_vec()
    }
}

impl<A> Clone for OwnedRepr<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        OwnedRepr(self.0.clone())
    }

    fn clone_from(&mut self, other: &Self) {
        if self.0.len() == other.0.len() {
            self.0.clone_from_slice(&other.0);
        } else {
            *self = other.clone();
        }
    }
}

/// Array's representation: a borrow of another array's storage.
///
/// Holds the whole backing buffer (`&[A]` or `&mut [A]`); the view's
/// offset selects the stripe. Borrowing the buffer is what ties a view's
/// lifetime to its owner.
///
/// *Don’t use this type directly—use the type aliases
/// [`ArrayView`](crate::ArrayView) / [`ArrayViewMut`](crate::ArrayViewMut)
/// for the array view types!*
#[derive(Copy, Clone, Debug)]
pub struct ViewRepr<A>(pub(crate) A);
