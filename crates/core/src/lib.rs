//! Core traits and types for golden-section search.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`] — a deterministic scalar function `f64 -> f64` that may fail
//! - [`Function`], [`Fallible`] — adapters that turn closures into objectives
//! - [`Observer`] — receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Fallible, Function, Objective};
pub use observer::Observer;
