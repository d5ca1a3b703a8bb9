//! Minimizes f(x) = x² − 4x + 3 on [0, 5] and prints the contraction history.
//!
//! # Usage
//!
//! ```text
//! cargo run -p golden-observers --example quadratic
//! RUST_LOG=debug cargo run -p golden-observers --example quadratic
//! ```
//!
//! With `RUST_LOG=debug`, every solver event is also logged through
//! [`LogObserver`].

use std::error::Error;

use golden_core::Function;
use golden_observers::LogObserver;
use golden_solvers::optimization::golden_section::{self, Config};
use tracing::info;

/// Rows of the contraction table to print.
const DISPLAY_STEPS: usize = 15;

fn f(x: f64) -> f64 {
    x * x - 4.0 * x + 3.0
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bracket = [0.0, 5.0];
    let config = Config::with_tolerance(1e-6)?;
    info!(?bracket, tolerance = config.tolerance(), "minimizing x² − 4x + 3");

    let solution = golden_section::minimize(&Function(f), bracket, &config, LogObserver::new())?;
    let (estimate, iters, history) = solution.into_parts();

    println!("{}", "=".repeat(50));
    println!("Optimized Result:");
    println!("Minimum Point    x* = {estimate:.8}");
    println!("Minimum Value f(x*) = {:.8}", f(estimate));
    println!("Iteration Count     = {iters}");
    println!("{}", "=".repeat(50));

    let steps = history.len().min(DISPLAY_STEPS);
    println!("Interval contraction (first {steps} steps):");
    println!("{:>4}  {:>12}  {:>12}  {:>10}", "step", "low", "high", "width");
    for (step, interval) in history.iter().take(steps).enumerate() {
        println!(
            "{step:>4}  {:>12.6}  {:>12.6}  {:>10.6}",
            interval.low,
            interval.high,
            interval.width()
        );
    }

    Ok(())
}
