//! # fastarray-core
//!
//! Element types and static promotion rules for the fastarray workspace.
//!
//! This crate provides:
//! - The closed set of numeric element types an array may hold
//! - A compile-time promotion table for mixed-type arithmetic
//! - The error type shared by the checked evaluation paths
//!
//! ## Design Principles
//!
//! - **Static Promotion**: Combining two element types resolves to a result
//!   type through trait resolution; unsupported pairs fail to compile
//! - **Closed Element Set**: `f64`, `f32`, `i32`, `i64` and `u32` only

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod error;
pub mod promote;

pub use element::{Element, Scalar};
pub use error::{FastArrayError, Result};
pub use promote::{Promote, Promoted};
