//! Reusable observers for golden-section search.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `golden-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasObjective`], [`HasInterval`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — emits one `tracing` event per solver event
//!
//! [`Observer`]: golden_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasInterval`]: traits::HasInterval
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;

pub use log::LogObserver;
