//! Arithmetic operator overloads.
//!
//! `+ - * /` accept any [`IntoExpr`] on the right of an array reference or
//! a composed node, and every element type on the left. Unary `-` is
//! available wherever the element type is signed. All of them return a
//! new node and evaluate nothing.
//!
//! ```compile_fail
//! use fastarray::FastArray;
//!
//! let a = FastArray::<i32>::filled(4, 1);
//! let b = FastArray::<u32>::filled(4, 1);
//! // No promotion between i32 and u32.
//! let _ = &a + &b;
//! ```
//!
//! ```compile_fail
//! use fastarray::FastArray;
//!
//! let a = FastArray::<u32>::filled(4, 1);
//! // u32 has no negation.
//! let _ = -&a;
//! ```

use std::ops;

use fastarray_core::{Element, Promote};

use crate::array::{Current, FastArray};
use crate::expr::{Constant, Expr, IntoExpr};
use crate::node::{Map, Zip};
use crate::op;

macro_rules! expr_binary_op {
    ($trait:ident, $method:ident, $tag:ident, [$($gen:tt)*], $ty:ty) => {
        impl<$($gen)*, Rhs> ops::$trait<Rhs> for $ty
        where
            $ty: Expr,
            Rhs: IntoExpr,
            <$ty as Expr>::Value: Promote<<Rhs::Expr as Expr>::Value>,
        {
            type Output = Zip<$ty, Rhs::Expr, op::$tag>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                Zip::new(self, rhs.into_expr())
            }
        }
    };
}

macro_rules! scalar_lhs_op {
    ($trait:ident, $method:ident, $tag:ident, [$($gen:tt)*], $ty:ty, $scalar:ty) => {
        impl<$($gen)*> ops::$trait<$ty> for $scalar
        where
            $ty: Expr,
            $scalar: Promote<<$ty as Expr>::Value>,
        {
            type Output = Zip<Constant<$scalar>, $ty, op::$tag>;

            #[inline]
            fn $method(self, rhs: $ty) -> Self::Output {
                Zip::new(Constant(self), rhs)
            }
        }
    };
}

macro_rules! scalar_lhs_ops {
    ($gens:tt $ty:ty;) => {};
    ($gens:tt $ty:ty; $scalar:ident $($rest:ident)*) => {
        scalar_lhs_op!(Add, add, Add, $gens, $ty, $scalar);
        scalar_lhs_op!(Sub, sub, Sub, $gens, $ty, $scalar);
        scalar_lhs_op!(Mul, mul, Mul, $gens, $ty, $scalar);
        scalar_lhs_op!(Div, div, Div, $gens, $ty, $scalar);
        scalar_lhs_ops!($gens $ty; $($rest)*);
    };
}

macro_rules! expr_neg_op {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ops::Neg for $ty
        where
            $ty: Expr,
            <$ty as Expr>::Value: ops::Neg<Output = <$ty as Expr>::Value>,
        {
            type Output = Map<$ty, op::Neg>;

            #[inline]
            fn neg(self) -> Self::Output {
                Map::new(self)
            }
        }
    };
}

macro_rules! expr_ops {
    ($gens:tt $ty:ty) => {
        expr_binary_op!(Add, add, Add, $gens, $ty);
        expr_binary_op!(Sub, sub, Sub, $gens, $ty);
        expr_binary_op!(Mul, mul, Mul, $gens, $ty);
        expr_binary_op!(Div, div, Div, $gens, $ty);
        expr_neg_op!($gens $ty);
        scalar_lhs_ops!($gens $ty; f64 f32 i32 i64 u32);
    };
}

expr_ops!(['a, T: Element] &'a FastArray<T>);
expr_ops!(['a, T: Element] Current<'a, T>);
expr_ops!([L, R, F] Zip<L, R, F>);
expr_ops!([E, F] Map<E, F>);
