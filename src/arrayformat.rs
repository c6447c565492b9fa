// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;

use crate::imp_prelude::*;

fn format_array<A, S, Sh, F>(
    array: &ArrayBase<S, Sh>,
    f: &mut fmt::Formatter<'_>,
    mut format: F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    S: Data<Elem = A>,
    Sh: Shape,
{
    let ndim = Sh::RANK;
    for _ in 0..ndim {
        write!(f, "[")?;
    }
    let mut first = true;
    // Iterate flat, and take the stride wraparounds as cues for when to
    // close and reopen brackets: a new block of axis k starts exactly
    // when STRIDES[k] divides the flat position.
    for (i, elt) in array.as_slice().iter().enumerate() {
        if i != 0 {
            let mut wraps = 0;
            for &stride in &Sh::STRIDES[..ndim.saturating_sub(1)] {
                if i % stride == 0 {
                    wraps += 1;
                }
            }
            if wraps > 0 {
                for _ in 0..wraps {
                    write!(f, "]")?;
                }
                write!(f, ",")?;
                writeln!(f)?;
                for _ in 0..ndim - wraps {
                    write!(f, " ")?;
                }
                for _ in 0..wraps {
                    write!(f, "[")?;
                }
                first = true;
            }
        }
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(elt, f)?;
    }
    for _ in 0..ndim {
        write!(f, "]")?;
    }
    Ok(())
}

/// Format the array using `Display` and apply the formatting parameters
/// used to each element.
///
/// The array is shown in multiline style.
impl<A: fmt::Display, S, Sh> fmt::Display for ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters
/// used to each element.
///
/// The array is shown in multiline style, followed by shape and stride
/// information.
impl<A: fmt::Debug, S, Sh> fmt::Debug for ArrayBase<S, Sh>
where
    S: Data<Elem = A>,
    Sh: Shape,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, ndim={}",
            self.shape(),
            self.strides(),
            self.ndim()
        )
    }
}
