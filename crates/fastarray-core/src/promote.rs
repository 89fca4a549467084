//! Static type promotion for mixed-type arithmetic.
//!
//! Combining two element types resolves, at compile time, to the type of
//! the result:
//!
//! | left ⊗ right                 | result |
//! |------------------------------|--------|
//! | `T ⊗ T`                      | `T`    |
//! | `f64 ⊗ {f32, i32, i64, u32}` | `f64`  |
//! | `f32 ⊗ {i32, i64, u32}`      | `f32`  |
//!
//! Both argument orders are covered. Promotion moves toward the wider
//! floating type; pairs of distinct integer types have no entry at all, so
//! an expression mixing them does not compile.
//!
//! ```compile_fail
//! use fastarray_core::{Element, Promote, Promoted};
//!
//! fn combine<L: Promote<R>, R: Element>(lhs: L, rhs: R) -> Promoted<L, R> {
//!     lhs.lift() + L::lift_rhs(rhs)
//! }
//!
//! // i32 ⊗ u32 has no promotion.
//! combine(1_i32, 2_u32);
//! ```
//!
//! ```compile_fail
//! use fastarray_core::{Element, Promote, Promoted};
//!
//! fn combine<L: Promote<R>, R: Element>(lhs: L, rhs: R) -> Promoted<L, R> {
//!     lhs.lift() + L::lift_rhs(rhs)
//! }
//!
//! // i32 ⊗ i64 has no promotion either.
//! combine(1_i32, 2_i64);
//! ```

use crate::element::Element;

/// The promotion relation between two element types.
///
/// `L: Promote<R>` exists only for the pairs listed in the module table.
pub trait Promote<Rhs: Element>: Element {
    /// The element type of `self ⊗ Rhs`.
    type Output: Element;

    /// Converts a left operand to the promoted type.
    fn lift(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts a right operand to the promoted type.
    fn lift_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for the promoted type of `L ⊗ R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! promote_identity {
    ($($t:ty),*) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline]
                fn lift(self) -> $t {
                    self
                }

                #[inline]
                fn lift_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

macro_rules! promote_pair {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline]
                fn lift(self) -> $out {
                    self as $out
                }

                #[inline]
                fn lift_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            impl Promote<$a> for $b {
                type Output = $out;

                #[inline]
                fn lift(self) -> $out {
                    self as $out
                }

                #[inline]
                fn lift_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote_identity!(f64, f32, i32, i64, u32);

promote_pair! {
    f64, f32 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, u32 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, u32 => f32;
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promoted_id<L: Promote<R>, R: Element>() -> TypeId {
        TypeId::of::<Promoted<L, R>>()
    }

    #[test]
    fn test_identity_promotion() {
        assert_eq!(promoted_id::<f64, f64>(), TypeId::of::<f64>());
        assert_eq!(promoted_id::<f32, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted_id::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(promoted_id::<i64, i64>(), TypeId::of::<i64>());
        assert_eq!(promoted_id::<u32, u32>(), TypeId::of::<u32>());
    }

    #[test]
    fn test_double_dominates() {
        for id in [
            promoted_id::<f64, f32>(),
            promoted_id::<f32, f64>(),
            promoted_id::<f64, i32>(),
            promoted_id::<i32, f64>(),
            promoted_id::<f64, i64>(),
            promoted_id::<i64, f64>(),
            promoted_id::<f64, u32>(),
            promoted_id::<u32, f64>(),
        ] {
            assert_eq!(id, TypeId::of::<f64>());
        }
    }

    #[test]
    fn test_float_over_integers() {
        for id in [
            promoted_id::<f32, i32>(),
            promoted_id::<i32, f32>(),
            promoted_id::<f32, i64>(),
            promoted_id::<i64, f32>(),
            promoted_id::<f32, u32>(),
            promoted_id::<u32, f32>(),
        ] {
            assert_eq!(id, TypeId::of::<f32>());
        }
    }

    #[test]
    fn test_lift_values() {
        assert_eq!(<f32 as Promote<f64>>::lift(1.5_f32), 1.5_f64);
        assert_eq!(<f64 as Promote<f32>>::lift_rhs(0.25_f32), 0.25_f64);
        assert_eq!(<i32 as Promote<f32>>::lift(-3), -3.0_f32);
        assert_eq!(<f32 as Promote<u32>>::lift_rhs(7), 7.0_f32);
        assert_eq!(<i64 as Promote<i64>>::lift(42), 42);
    }

    fn sum_promoted<L: Promote<R>, R: Element>(lhs: L, rhs: R) -> Promoted<L, R> {
        lhs.lift() + L::lift_rhs(rhs)
    }

    #[test]
    fn test_lift_through_generic_bound() {
        assert_eq!(sum_promoted(2_i32, 0.5_f64), 2.5_f64);
        assert_eq!(sum_promoted(0.5_f32, 3_u32), 3.5_f32);
        assert_eq!(sum_promoted(4_i64, 5_i64), 9_i64);
    }
}
