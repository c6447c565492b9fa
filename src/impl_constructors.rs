// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for ndfixed
//!
//! Only the owned representation can be constructed; views are produced
//! from existing arrays. The shape never accompanies a constructor call,
//! since it is already part of the type; the only runtime question is
//! where the element values come from.

use alloc::vec::Vec;

use num_traits::{One, Zero};

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::imp_prelude::*;

/// # Constructor methods for owned arrays
impl<S, A, Sh> ArrayBase<S, Sh>
where
    S: DataOwned<Elem = A>,
    Sh: Shape,
{
    /// Create an array with every element default-initialized.
    ///
    /// ```
    /// use ndfixed::Array2;
    ///
    /// let a = Array2::<i32, 2, 2>::new();
    /// assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
    /// ```
    pub fn new() -> Self
    where
        A: Default,
    {
        let mut v = Vec::new();
        v.resize_with(Sh::SIZE, A::default);
        ArrayBase::from_data_offset(S::new(v), 0)
    }

    /// Create an array from a vector of at most `Sh::SIZE` elements,
    /// placed in flattening order; the remaining slots are
    /// default-initialized.
    ///
    /// A longer vector is an error of kind
    /// [`ErrorKind::TooManyElements`]; the shape never grows to fit.
    ///
    /// ```
    /// use ndfixed::{Array, Rank2};
    ///
    /// let a = Array::<i32, Rank2<2, 3>>::from_vec(vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4, 0, 0]);
    ///
    /// assert!(Array::<i32, Rank2<2, 3>>::from_vec(vec![0; 7]).is_err());
    /// ```
    pub fn from_vec(mut v: Vec<A>) -> Result<Self, ShapeError>
    where
        A: Default,
    {
        if v.len() > Sh::SIZE {
            return Err(from_kind(ErrorKind::TooManyElements));
        }
        v.resize_with(Sh::SIZE, A::default);
        Ok(ArrayBase::from_data_offset(S::new(v), 0))
    }

    /// Create an array by cloning the elements of a slice; exactly like
    /// [`from_vec`](ArrayBase::from_vec) otherwise.
    pub fn from_slice(xs: &[A]) -> Result<Self, ShapeError>
    where
        A: Clone + Default,
    {
        if xs.len() > Sh::SIZE {
            return Err(from_kind(ErrorKind::TooManyElements));
        }
        let mut v = Vec::with_capacity(Sh::SIZE);
        v.extend_from_slice(xs);
        v.resize_with(Sh::SIZE, A::default);
        Ok(ArrayBase::from_data_offset(S::new(v), 0))
    }

    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use ndfixed::Array3;
    ///
    /// let a = Array3::<f64, 2, 2, 2>::from_elem(1.);
    /// assert!(a.iter().all(|&x| x == 1.));
    /// ```
    pub fn from_elem(elem: A) -> Self
    where
        A: Clone,
    {
        let mut v = Vec::with_capacity(Sh::SIZE);
        v.resize(Sh::SIZE, elem);
        ArrayBase::from_data_offset(S::new(v), 0)
    }

    /// Create an array of all zeros.
    pub fn zeros() -> Self
    where
        A: Clone + Zero,
    {
        Self::from_elem(A::zero())
    }

    /// Create an array of all ones.
    pub fn ones() -> Self
    where
        A: Clone + One,
    {
        Self::from_elem(A::one())
    }
}
