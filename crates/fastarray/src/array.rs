//! The owning array container.
//!
//! [`FastArray`] separates its logical `size` from its allocated
//! `capacity`. Shrinking only moves the logical end; growing past the
//! capacity drops the old buffer and allocates exactly the new size. Across
//! a shrink/grow/shrink cycle the capacity never decreases, so repeated
//! resizing within a working set does not touch the allocator.
//!
//! The container is the only place where expressions are evaluated: the
//! assignment family walks `[0, size)` once and asks the expression tree
//! for each element.

use std::cell::Cell;
use std::fmt;
use std::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use log::trace;

use fastarray_core::{Element, FastArrayError, Result, Scalar};

use crate::expr::{Expr, IntoExpr};

/// A resizable, contiguous array of numeric elements.
///
/// Elements in `[size, capacity)` hold stale data from earlier use of the
/// buffer (zero if never written).
pub struct FastArray<T = Scalar> {
    /// Backing buffer; its length is the capacity.
    data: Vec<T>,
    /// Logical element count.
    size: usize,
}

impl<T: Element> FastArray<T> {
    /// Creates an empty array without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
        }
    }

    /// Creates an array of exactly `size` elements with unspecified
    /// contents.
    ///
    /// # Panics
    ///
    /// Aborts or panics if the allocation cannot be satisfied; use
    /// [`try_with_size`](Self::try_with_size) to handle that case.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
            size,
        }
    }

    /// Creates an array of exactly `size` elements, reporting allocation
    /// failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`FastArrayError::Allocation`] if the buffer cannot be
    /// reserved.
    pub fn try_with_size(size: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| FastArrayError::Allocation { requested: size })?;
        data.resize(size, T::zero());
        Ok(Self { data, size })
    }

    /// Creates an array of `size` elements, all set to `value`.
    #[must_use]
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size],
            size,
        }
    }

    /// Evaluates `rhs` into a new array sized to its shortest array
    /// operand.
    ///
    /// # Errors
    ///
    /// Returns [`FastArrayError::Unbounded`] if `rhs` has no array operand,
    /// or [`FastArrayError::Allocation`] if the result cannot be allocated.
    pub fn evaluate<E>(rhs: E) -> Result<Self>
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        let rhs = rhs.into_expr();
        let size = rhs.extent().ok_or(FastArrayError::Unbounded)?;
        let mut out = Self::try_with_size(size)?;
        out.assign(rhs);
        Ok(out)
    }

    /// Returns the logical number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the logical size is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Sets the logical size.
    ///
    /// Within the current capacity the buffer and its contents are kept,
    /// so indices newly exposed by growing hold whatever they held before.
    /// Beyond it, the old buffer is released and a buffer of exactly
    /// `new_size` elements replaces it; prior contents are lost.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.capacity() {
            self.size = new_size;
            return;
        }

        trace!(
            "reallocating FastArray<{}>: capacity {} -> {}",
            T::NAME,
            self.capacity(),
            new_size
        );
        drop(std::mem::take(&mut self.data));
        self.data = vec![T::zero(); new_size];
        self.size = new_size;
    }

    /// Returns the logical elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Returns the logical elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.size]
    }

    /// Iterates over the logical elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the element at `index`, or `None` outside
    /// `[0, size)`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// outside `[0, size)`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index` without any check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any
    /// check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Sets every element in `[0, size)` to `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Evaluates `rhs` at every index in `[0, size)` and stores the result.
    ///
    /// Operand sizes are not compared with the destination. An operand
    /// shorter than `size` yields its stale tail, or panics once the read
    /// passes its buffer; a longer one has its extra elements ignored.
    pub fn assign<E>(&mut self, rhs: E)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        let rhs = rhs.into_expr();
        for (index, slot) in self.as_mut_slice().iter_mut().enumerate() {
            *slot = rhs.value_at(index);
        }
    }

    /// Checks that every array operand of `rhs` covers `[0, size)`.
    ///
    /// # Errors
    ///
    /// Returns [`FastArrayError::ExtentMismatch`] naming the shortest
    /// operand's size.
    pub fn check_extent<E: Expr>(&self, rhs: &E) -> Result<()> {
        match rhs.extent() {
            Some(available) if available < self.size => Err(FastArrayError::ExtentMismatch {
                required: self.size,
                available,
            }),
            _ => Ok(()),
        }
    }

    /// Like [`assign`](Self::assign), but refuses expressions whose array
    /// operands are shorter than the destination.
    ///
    /// # Errors
    ///
    /// Returns [`FastArrayError::ExtentMismatch`]; the destination is left
    /// untouched.
    pub fn try_assign<E>(&mut self, rhs: E) -> Result<()>
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        let rhs = rhs.into_expr();
        self.check_extent(&rhs)?;
        self.assign(rhs);
        Ok(())
    }

    /// Evaluates an expression that reads this array's own elements and
    /// stores the result in place.
    ///
    /// `build` receives a [`Current`] leaf standing for this array. Element
    /// `i` is read from every occurrence of the leaf before element `i` is
    /// written, so no copy of the destination is taken.
    ///
    /// ```rust
    /// use fastarray::FastArray;
    ///
    /// let a = FastArray::filled(8, 3.0_f64);
    /// let mut d = FastArray::filled(8, 11.0_f64);
    /// d.assign_with(|d| &a * (d + 13.0_f64));
    /// assert!(d.iter().all(|&v| v == 72.0));
    /// ```
    pub fn assign_with<'s, F, E>(&'s mut self, build: F)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        self.update_with(build, |_, value| value);
    }

    /// In-place `+=` whose right side may read this array.
    pub fn add_assign_with<'s, F, E>(&'s mut self, build: F)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        self.update_with(build, |old, value| old + value);
    }

    /// In-place `-=` whose right side may read this array.
    pub fn sub_assign_with<'s, F, E>(&'s mut self, build: F)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        self.update_with(build, |old, value| old - value);
    }

    /// In-place `*=` whose right side may read this array.
    pub fn mul_assign_with<'s, F, E>(&'s mut self, build: F)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        self.update_with(build, |old, value| old * value);
    }

    /// In-place `/=` whose right side may read this array.
    pub fn div_assign_with<'s, F, E>(&'s mut self, build: F)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
    {
        self.update_with(build, |old, value| old / value);
    }

    fn update_with<'s, F, E, G>(&'s mut self, build: F, combine: G)
    where
        F: FnOnce(Current<'s, T>) -> E,
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
        G: Fn(T, T) -> T,
    {
        let cells = Cell::from_mut(self.as_mut_slice()).as_slice_of_cells();
        let rhs = build(Current { cells }).into_expr();
        for (index, cell) in cells.iter().enumerate() {
            let value = rhs.value_at(index);
            cell.set(combine(cell.get(), value));
        }
    }

    /// Folds `rhs` into every element in `[0, size)` with `combine`.
    fn update<E, G>(&mut self, rhs: E, combine: G)
    where
        E: IntoExpr,
        E::Expr: Expr<Value = T>,
        G: Fn(&mut T, T),
    {
        let rhs = rhs.into_expr();
        for (index, slot) in self.as_mut_slice().iter_mut().enumerate() {
            combine(slot, rhs.value_at(index));
        }
    }
}

impl<T: Element> Default for FastArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for FastArray<T> {
    /// Copies the logical elements into a buffer of exactly `size`.
    fn clone(&self) -> Self {
        Self {
            data: self.as_slice().to_vec(),
            size: self.size,
        }
    }

    /// Copies the logical elements of `source`, reallocating only if the
    /// current capacity is too small.
    fn clone_from(&mut self, source: &Self) {
        self.resize(source.size);
        self.as_mut_slice().copy_from_slice(source.as_slice());
    }
}

impl<T: Element> PartialEq for FastArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> fmt::Debug for FastArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Element> From<Vec<T>> for FastArray<T> {
    fn from(data: Vec<T>) -> Self {
        let size = data.len();
        Self { data, size }
    }
}

impl<T: Element> FromIterator<T> for FastArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// Indexes the buffer directly. Indices in `[size, capacity)` are not
/// rejected; an index at or past the capacity panics.
impl<T> Index<usize> for FastArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for FastArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T: Element> Expr for &'a FastArray<T> {
    type Value = T;

    #[inline]
    fn value_at(&self, index: usize) -> T {
        self.data[index]
    }

    fn extent(&self) -> Option<usize> {
        Some(self.size)
    }
}

/// The logical elements of an array that is being assigned to, usable as
/// an operand of the expression assigned into it.
///
/// Handed out by [`FastArray::assign_with`] and its compound forms.
#[derive(Clone, Copy)]
pub struct Current<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T: Element> Expr for Current<'a, T> {
    type Value = T;

    #[inline]
    fn value_at(&self, index: usize) -> T {
        self.cells[index].get()
    }

    fn extent(&self) -> Option<usize> {
        Some(self.cells.len())
    }
}

impl<T: Element, Rhs> AddAssign<Rhs> for FastArray<T>
where
    Rhs: IntoExpr,
    Rhs::Expr: Expr<Value = T>,
{
    fn add_assign(&mut self, rhs: Rhs) {
        self.update(rhs, |slot, value| *slot += value);
    }
}

impl<T: Element, Rhs> SubAssign<Rhs> for FastArray<T>
where
    Rhs: IntoExpr,
    Rhs::Expr: Expr<Value = T>,
{
    fn sub_assign(&mut self, rhs: Rhs) {
        self.update(rhs, |slot, value| *slot -= value);
    }
}

impl<T: Element, Rhs> MulAssign<Rhs> for FastArray<T>
where
    Rhs: IntoExpr,
    Rhs::Expr: Expr<Value = T>,
{
    fn mul_assign(&mut self, rhs: Rhs) {
        self.update(rhs, |slot, value| *slot *= value);
    }
}

impl<T: Element, Rhs> DivAssign<Rhs> for FastArray<T>
where
    Rhs: IntoExpr,
    Rhs::Expr: Expr<Value = T>,
{
    fn div_assign(&mut self, rhs: Rhs) {
        self.update(rhs, |slot, value| *slot /= value);
    }
}
