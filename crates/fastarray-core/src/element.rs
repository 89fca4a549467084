//! Numeric element types.
//!
//! Arrays hold one of a small, closed set of primitive numeric types. The
//! set mirrors the types covered by the promotion table.

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Num, NumCast};

/// The default element type of an array.
pub type Scalar = f64;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u32 {}
}

/// A primitive numeric type that can be stored in an array and combined
/// elementwise.
///
/// This trait is sealed: the supported types are `f64`, `f32`, `i32`,
/// `i64` and `u32`.
pub trait Element:
    sealed::Sealed
    + Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Num
    + NumCast
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Name of the type, used in diagnostics.
    const NAME: &'static str;
}

impl Element for f64 {
    const NAME: &'static str = "f64";
}

impl Element for f32 {
    const NAME: &'static str = "f32";
}

impl Element for i32 {
    const NAME: &'static str = "i32";
}

impl Element for i64 {
    const NAME: &'static str = "i64";
}

impl Element for u32 {
    const NAME: &'static str = "u32";
}
