//! Solvers for optimization problems — minimizing or maximizing an objective.
//!
//! An [`Objective`] maps a scalar `x` to a scalar value. Solvers in this module
//! search a bounded interval for the `x` that minimizes or maximizes it.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions, recording every contraction of the bracket
//!
//! [`Objective`]: golden_core::Objective

pub mod golden_section;
