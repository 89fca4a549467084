//! Elementwise math functions.
//!
//! Each function here is a thin binding: it names a tag and builds a
//! [`Map`] or [`Zip`] node, exactly like the arithmetic operators do.
//! Nothing is evaluated until the node is assigned into an array.
//!
//! Transcendental functions need a floating element type. Mixing an
//! integer array into `pow`, `max`, `min` or `atan2` is fine as long as the
//! promoted type is floating.

use num_traits::{Float, Signed};

use fastarray_core::{Element, Promote, Promoted};

use crate::expr::{Expr, IntoExpr};
use crate::node::{Map, Zip};
use crate::op::{self, BinaryFn, UnaryFn};

macro_rules! float_unary {
    ($($(#[$doc:meta])* $name:ident => $tag:ident :: $method:ident;)*) => {
        $(
            #[doc = concat!("Tag for [`", stringify!($name), "`].")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $tag;

            impl<T: Element + Float> UnaryFn<T> for $tag {
                #[inline]
                fn call(value: T) -> T {
                    Float::$method(value)
                }
            }

            $(#[$doc])*
            #[inline]
            pub fn $name<A>(operand: A) -> Map<A::Expr, $tag>
            where
                A: IntoExpr,
                <A::Expr as Expr>::Value: Float,
            {
                Map::new(operand.into_expr())
            }
        )*
    };
}

macro_rules! float_binary {
    ($($(#[$doc:meta])* $name:ident => $tag:ident :: $method:ident;)*) => {
        $(
            #[doc = concat!("Tag for [`", stringify!($name), "`].")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $tag;

            impl<T: Element + Float> BinaryFn<T> for $tag {
                #[inline]
                fn call(lhs: T, rhs: T) -> T {
                    Float::$method(lhs, rhs)
                }
            }

            $(#[$doc])*
            #[inline]
            pub fn $name<A, B>(lhs: A, rhs: B) -> Zip<A::Expr, B::Expr, $tag>
            where
                A: IntoExpr,
                B: IntoExpr,
                <A::Expr as Expr>::Value: Promote<<B::Expr as Expr>::Value>,
                Promoted<<A::Expr as Expr>::Value, <B::Expr as Expr>::Value>: Float,
            {
                Zip::new(lhs.into_expr(), rhs.into_expr())
            }
        )*
    };
}

float_unary! {
    /// `e^x` for every element.
    exp => Exp::exp;
    /// Natural logarithm of every element.
    log => Ln::ln;
    /// Base-10 logarithm of every element.
    log10 => Log10::log10;
    /// Square root of every element.
    sqrt => Sqrt::sqrt;
    /// Sine of every element.
    sin => Sin::sin;
    /// Cosine of every element.
    cos => Cos::cos;
    /// Tangent of every element.
    tan => Tan::tan;
    /// Arcsine of every element.
    asin => Asin::asin;
    /// Arccosine of every element.
    acos => Acos::acos;
    /// Arctangent of every element.
    atan => Atan::atan;
    /// Hyperbolic sine of every element.
    sinh => Sinh::sinh;
    /// Hyperbolic cosine of every element.
    cosh => Cosh::cosh;
    /// Hyperbolic tangent of every element.
    tanh => Tanh::tanh;
    /// Floating absolute value of every element.
    fabs => Fabs::abs;
}

float_binary! {
    /// `lhs^rhs` for every element pair.
    pow => Pow::powf;
    /// Larger of each element pair; a NaN operand yields the other one.
    max => Max::max;
    /// Smaller of each element pair; a NaN operand yields the other one.
    min => Min::min;
    /// Four-quadrant arctangent of `lhs / rhs` for every element pair.
    atan2 => Atan2::atan2;
}

/// Tag for [`abs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Abs;

impl<T: Element + Signed> UnaryFn<T> for Abs {
    #[inline]
    fn call(value: T) -> T {
        Signed::abs(&value)
    }
}

/// Absolute value of every element, for any signed element type.
#[inline]
pub fn abs<A>(operand: A) -> Map<A::Expr, Abs>
where
    A: IntoExpr,
    <A::Expr as Expr>::Value: Signed,
{
    Map::new(operand.into_expr())
}

/// Unary plus: every element unchanged.
#[inline]
pub fn pos<A: IntoExpr>(operand: A) -> Map<A::Expr, op::Pos> {
    Map::new(operand.into_expr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_matches_std() {
        let x = 0.3_f64;
        assert_eq!(exp(x).value_at(0), x.exp());
        assert_eq!(log(x).value_at(0), x.ln());
        assert_eq!(log10(x).value_at(0), x.log10());
        assert_eq!(sqrt(x).value_at(0), x.sqrt());
        assert_eq!(sin(x).value_at(0), x.sin());
        assert_eq!(cos(x).value_at(0), x.cos());
        assert_eq!(tan(x).value_at(0), x.tan());
        assert_eq!(asin(x).value_at(0), x.asin());
        assert_eq!(acos(x).value_at(0), x.acos());
        assert_eq!(atan(x).value_at(0), x.atan());
        assert_eq!(sinh(x).value_at(0), x.sinh());
        assert_eq!(cosh(x).value_at(0), x.cosh());
        assert_eq!(tanh(x).value_at(0), x.tanh());
    }

    #[test]
    fn test_abs_variants() {
        assert_eq!(abs(-4_i32).value_at(0), 4);
        assert_eq!(abs(-4_i64).value_at(3), 4);
        assert_eq!(abs(-2.5_f32).value_at(0), 2.5);
        assert_eq!(fabs(-2.5_f64).value_at(0), 2.5);
    }

    #[test]
    fn test_binary_functions() {
        assert_eq!(pow(2.0_f64, 10.0_f64).value_at(0), 1024.0);
        assert_eq!(max(2.0_f64, 3.0_f64).value_at(0), 3.0);
        assert_eq!(min(2.0_f64, 3.0_f64).value_at(0), 2.0);
        assert_eq!(atan2(1.0_f64, 1.0_f64).value_at(0), 1.0_f64.atan2(1.0));
    }

    #[test]
    fn test_binary_functions_promote() {
        // i32 ⊗ f32 -> f32
        let node = pow(3_i32, 2.0_f32);
        assert_eq!(node.value_at(0), 9.0_f32);
        assert_eq!(max(f64::NAN, 1_u32).value_at(0), 1.0);
    }

    #[test]
    fn test_nested_math() {
        let node = sqrt(pow(3.0_f64, 2.0_f64));
        assert_eq!(node.value_at(0), 3.0_f64.powf(2.0).sqrt());
        assert_eq!(pos(-1.5_f64).value_at(0), -1.5);
    }
}
