// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndfixed prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use ndfixed::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{Array, ArrayBase, ArrayView, ArrayViewMut};

#[doc(no_inline)]
pub use crate::{Rank0, Rank1, Rank2, Rank3, Rank4, Rank5, Rank6};

#[doc(no_inline)]
pub use crate::{RemoveOuter, Shape};

#[doc(no_inline)]
pub use crate::{Array0, Array1, Array2, Array3, Array4, Array5, Array6};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};
