//! Numerical solvers built on the `golden-core` traits.
//!
//! # Modules
//!
//! - [`optimization`] — minimizing or maximizing a scalar objective

pub mod optimization;
