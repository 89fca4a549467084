//! # fastarray
//!
//! Resizable numeric arrays with lazily evaluated, fused elementwise
//! arithmetic.
//!
//! This crate provides:
//! - [`FastArray`], an owning buffer with separate size and capacity
//! - Expression nodes built by `+ - * /`, unary `-` and named math
//!   functions, which evaluate nothing until assigned
//! - Single-pass evaluation of arbitrarily nested expressions, with no
//!   temporary arrays
//! - Parallel evaluation via rayon
//!
//! ## Example
//!
//! ```rust
//! use fastarray::prelude::*;
//!
//! let a = FastArray::filled(1000, 3.0_f64);
//! let b = FastArray::filled(1000, 4.0_f64);
//! let c = FastArray::filled(1000, 7.0_f64);
//! let d = FastArray::filled(1000, 11.0_f64);
//! let e = 13.0_f64;
//!
//! // Builds a tree; nothing is computed yet.
//! let expr = &a + &b * &c / (&d + e);
//!
//! // One pass over `f`, no intermediate arrays.
//! let mut f = FastArray::<f64>::with_size(1000);
//! f.assign(expr);
//!
//! assert!(f.iter().all(|&v| v == 3.0 + 4.0 * 7.0 / (11.0 + 13.0)));
//! f += exp(&a) - 1.0_f64;
//! ```
//!
//! ## Evaluation Model
//!
//! An operator applied to arrays returns a [`Zip`] or [`Map`] node holding
//! borrows of its operands. Assigning a node walks the destination's
//! `[0, size)` once, computing each element through the whole tree. The
//! borrows tie the tree to its arrays, so it can never outlive them; the
//! same rule means an array cannot appear on both sides of `assign`.
//! An expression that reads its own destination goes through
//! [`FastArray::assign_with`], whose closure receives the destination as a
//! [`Current`] leaf:
//!
//! ```rust
//! use fastarray::prelude::*;
//!
//! let a = FastArray::filled(100, 3.0_f64);
//! let b = FastArray::filled(100, 5.0_f64);
//! let c = FastArray::filled(100, 7.0_f64);
//! let mut d = FastArray::filled(100, 11.0_f64);
//!
//! d.assign_with(|d| &a + &b * &c / (d + 13.0_f64));
//! assert!(d.iter().all(|&v| v == 3.0 + 5.0 * 7.0 / (11.0 + 13.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod array;
pub mod expr;
pub mod math;
pub mod node;
pub mod op;
pub mod parallel;

mod overload;

pub use array::{Current, FastArray};
pub use expr::{Constant, Expr, IntoExpr};
pub use fastarray_core::{Element, FastArrayError, Promote, Promoted, Result, Scalar};
pub use node::{map_with, zip_with, Map, Zip};
pub use parallel::ParallelConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::array::{Current, FastArray};
    pub use crate::expr::{Constant, Expr, IntoExpr};
    pub use crate::math::{
        abs, acos, asin, atan, atan2, cos, cosh, exp, fabs, log, log10, max, min, pos, pow, sin,
        sinh, sqrt, tan, tanh,
    };
    pub use crate::parallel::ParallelConfig;
    pub use fastarray_core::{Element, Scalar};
}

#[cfg(test)]
mod proptests;
