//! Composed expression nodes.
//!
//! [`Zip`] and [`Map`] are the only two composite node types. Every
//! operator and named math function builds one of them; the tag parameter
//! selects the scalar operation. Children are owned by value, and since
//! array leaves are borrows a whole tree is a handful of pointers.

use std::marker::PhantomData;

use fastarray_core::{Promote, Promoted};

use crate::expr::{merge_extent, Expr, IntoExpr};
use crate::op::{BinaryFn, UnaryFn};

/// Elementwise combination of two expressions.
///
/// `value_at(i)` lifts both children's values to their promoted type and
/// applies `F`.
#[derive(Debug)]
pub struct Zip<L, R, F> {
    left: L,
    right: R,
    op: PhantomData<F>,
}

impl<L, R, F> Zip<L, R, F> {
    /// Creates a node combining `left` and `right` with `F`.
    #[inline]
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            op: PhantomData,
        }
    }
}

impl<L: Clone, R: Clone, F> Clone for Zip<L, R, F> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

impl<L: Copy, R: Copy, F> Copy for Zip<L, R, F> {}

impl<L, R, F> Expr for Zip<L, R, F>
where
    L: Expr,
    R: Expr,
    L::Value: Promote<R::Value>,
    F: BinaryFn<Promoted<L::Value, R::Value>>,
{
    type Value = Promoted<L::Value, R::Value>;

    #[inline]
    fn value_at(&self, index: usize) -> Self::Value {
        let lhs = self.left.value_at(index).lift();
        let rhs = <L::Value as Promote<R::Value>>::lift_rhs(self.right.value_at(index));
        F::call(lhs, rhs)
    }

    fn extent(&self) -> Option<usize> {
        merge_extent(self.left.extent(), self.right.extent())
    }
}

/// Elementwise transformation of one expression.
#[derive(Debug)]
pub struct Map<E, F> {
    inner: E,
    op: PhantomData<F>,
}

impl<E, F> Map<E, F> {
    /// Creates a node applying `F` to every element of `inner`.
    #[inline]
    #[must_use]
    pub const fn new(inner: E) -> Self {
        Self {
            inner,
            op: PhantomData,
        }
    }
}

impl<E: Clone, F> Clone for Map<E, F> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<E: Copy, F> Copy for Map<E, F> {}

impl<E, F> Expr for Map<E, F>
where
    E: Expr,
    F: UnaryFn<E::Value>,
{
    type Value = E::Value;

    #[inline]
    fn value_at(&self, index: usize) -> E::Value {
        F::call(self.inner.value_at(index))
    }

    fn extent(&self) -> Option<usize> {
        self.inner.extent()
    }
}

/// Builds a [`Zip`] node from any two operands.
///
/// Fails to compile when the operands' element types have no promotion.
#[inline]
pub fn zip_with<F, A, B>(lhs: A, rhs: B) -> Zip<A::Expr, B::Expr, F>
where
    A: IntoExpr,
    B: IntoExpr,
    <A::Expr as Expr>::Value: Promote<<B::Expr as Expr>::Value>,
    F: BinaryFn<Promoted<<A::Expr as Expr>::Value, <B::Expr as Expr>::Value>>,
{
    Zip::new(lhs.into_expr(), rhs.into_expr())
}

/// Builds a [`Map`] node from any operand.
#[inline]
pub fn map_with<F, A>(operand: A) -> Map<A::Expr, F>
where
    A: IntoExpr,
    F: UnaryFn<<A::Expr as Expr>::Value>,
{
    Map::new(operand.into_expr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Constant;
    use crate::op;

    #[test]
    fn test_zip_constants() {
        let node = zip_with::<op::Add, _, _>(3.0_f64, 4.0_f64);
        assert_eq!(node.value_at(0), 7.0);
        assert_eq!(node.value_at(17), 7.0);
        assert_eq!(node.extent(), None);
    }

    #[test]
    fn test_zip_promotes_operands() {
        let node = zip_with::<op::Div, _, _>(7_i32, 2.0_f64);
        assert_eq!(node.value_at(0), 3.5);
    }

    #[test]
    fn test_nested_nodes() {
        let inner = zip_with::<op::Mul, _, _>(Constant(4.0_f64), Constant(7.0_f64));
        let outer = zip_with::<op::Sub, _, _>(inner, 3.0_f64);
        let negated = map_with::<op::Neg, _>(outer);
        assert_eq!(negated.value_at(0), -(4.0 * 7.0 - 3.0));
    }

    #[test]
    fn test_nodes_are_copy() {
        let node = zip_with::<op::Add, _, _>(1_i64, 2_i64);
        let copy = node;
        assert_eq!(node.value_at(0), copy.value_at(0));
    }

    #[test]
    fn test_node_size_is_children_only() {
        let node = zip_with::<op::Add, _, _>(1.0_f64, 2.0_f64);
        assert_eq!(std::mem::size_of_val(&node), 2 * std::mem::size_of::<f64>());
    }
}
