//! Operator tags.
//!
//! A tag is a zero-sized type naming one scalar operation. Composed nodes
//! carry their tag as a type parameter, so the operation is resolved at
//! compile time and a node costs nothing beyond its children.

use std::ops;

use fastarray_core::Element;

/// A scalar operation of one argument.
pub trait UnaryFn<T> {
    /// Applies the operation.
    fn call(value: T) -> T;
}

/// A scalar operation of two arguments of the same type.
pub trait BinaryFn<T> {
    /// Applies the operation.
    fn call(lhs: T, rhs: T) -> T;
}

/// `lhs + rhs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Add;

/// `lhs - rhs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sub;

/// `lhs * rhs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mul;

/// `lhs / rhs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Div;

/// `-value`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neg;

/// `+value` (identity).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos;

impl<T: Element> BinaryFn<T> for Add {
    #[inline]
    fn call(lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl<T: Element> BinaryFn<T> for Sub {
    #[inline]
    fn call(lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

impl<T: Element> BinaryFn<T> for Mul {
    #[inline]
    fn call(lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

impl<T: Element> BinaryFn<T> for Div {
    #[inline]
    fn call(lhs: T, rhs: T) -> T {
        lhs / rhs
    }
}

impl<T: Element + ops::Neg<Output = T>> UnaryFn<T> for Neg {
    #[inline]
    fn call(value: T) -> T {
        -value
    }
}

impl<T: Element> UnaryFn<T> for Pos {
    #[inline]
    fn call(value: T) -> T {
        value
    }
}
