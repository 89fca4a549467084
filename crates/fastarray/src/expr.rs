//! The indexing contract shared by arrays, scalars and composed nodes.
//!
//! Every expression node answers one question: what element would the
//! whole sub-expression hold at position `i` if it were materialized?
//! Arrays answer by reading their buffer, constants ignore the index, and
//! composed nodes ([`Zip`](crate::node::Zip), [`Map`](crate::node::Map))
//! ask their children and combine the answers.
//!
//! Nodes never allocate. Array leaves are plain borrows, so a tree carries
//! the lifetime of every array it reads and cannot be evaluated after any
//! of them is dropped:
//!
//! ```compile_fail
//! use fastarray::FastArray;
//!
//! let expr = {
//!     let a = FastArray::filled(4, 1.0);
//!     &a + 2.0
//! };
//! let mut out = FastArray::with_size(4);
//! out.assign(expr);
//! ```

use fastarray_core::Element;

/// An inert elementwise computation, evaluated one index at a time.
pub trait Expr {
    /// Element type produced by the expression.
    type Value: Element;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies beyond the buffer of an array operand.
    fn value_at(&self, index: usize) -> Self::Value;

    /// Number of elements the expression can supply, if bounded.
    ///
    /// This is the logical size of the shortest array operand, or `None`
    /// for an expression built only from constants.
    fn extent(&self) -> Option<usize> {
        None
    }
}

/// Conversion into an expression node.
///
/// Implemented for every node, for array references and for bare scalars,
/// so operators and named functions accept any mix of them.
pub trait IntoExpr {
    /// The node type produced.
    type Expr: Expr;

    /// Wraps `self` as an expression node.
    fn into_expr(self) -> Self::Expr;
}

impl<E: Expr> IntoExpr for E {
    type Expr = E;

    #[inline]
    fn into_expr(self) -> E {
        self
    }
}

/// A scalar constant broadcast to every index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constant<T>(pub T);

impl<T: Element> Expr for Constant<T> {
    type Value = T;

    #[inline]
    fn value_at(&self, _index: usize) -> T {
        self.0
    }
}

impl IntoExpr for f64 {
    type Expr = Constant<f64>;

    #[inline]
    fn into_expr(self) -> Constant<f64> {
        Constant(self)
    }
}

impl IntoExpr for f32 {
    type Expr = Constant<f32>;

    #[inline]
    fn into_expr(self) -> Constant<f32> {
        Constant(self)
    }
}

impl IntoExpr for i32 {
    type Expr = Constant<i32>;

    #[inline]
    fn into_expr(self) -> Constant<i32> {
        Constant(self)
    }
}

impl IntoExpr for i64 {
    type Expr = Constant<i64>;

    #[inline]
    fn into_expr(self) -> Constant<i64> {
        Constant(self)
    }
}

impl IntoExpr for u32 {
    type Expr = Constant<u32>;

    #[inline]
    fn into_expr(self) -> Constant<u32> {
        Constant(self)
    }
}

/// Combines the extents of two operands: the shorter bounded one wins.
#[inline]
#[must_use]
pub(crate) fn merge_extent(lhs: Option<usize>, rhs: Option<usize>) -> Option<usize> {
    match (lhs, rhs) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
