//! Prelude for the crate's own impl modules.

pub use crate::{
    Array, ArrayBase, ArrayView, ArrayViewMut, Data, DataMut, DataOwned, OwnedRepr, RemoveOuter,
    Shape, ViewRepr,
};
