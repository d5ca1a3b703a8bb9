use std::convert::Infallible;

/// A scalar objective function to be searched.
///
/// Objectives must be deterministic, always producing the same value for a
/// given `x`. Solvers rely on this to reuse earlier evaluations instead of
/// calling the objective again.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type to represent domain-specific failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Objective + ?Sized> Objective for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// Adapts an infallible closure `Fn(f64) -> f64` into an [`Objective`].
///
/// # Example
///
/// ```
/// use golden_core::{Function, Objective};
///
/// let parabola = Function(|x: f64| x * x - 4.0 * x + 3.0);
/// assert_eq!(parabola.call(2.0), Ok(-1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Function<F>(pub F);

impl<F> Objective for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

impl<F> From<F> for Function<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Self(function)
    }
}

/// Adapts a fallible closure `Fn(f64) -> Result<f64, E>` into an [`Objective`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("negative input: {0}")]
    struct NegativeInput(f64);

    fn sqrt_checked(x: f64) -> Result<f64, NegativeInput> {
        if x < 0.0 {
            Err(NegativeInput(x))
        } else {
            Ok(x.sqrt())
        }
    }

    #[test]
    fn function_wraps_closure() {
        let square = Function(|x: f64| x * x);
        assert_eq!(square.call(3.0), Ok(9.0));
    }

    #[test]
    fn function_from_fn_pointer() {
        fn cube(x: f64) -> f64 {
            x * x * x
        }

        let objective = Function::from(cube as fn(f64) -> f64);
        assert_eq!(objective.call(-2.0), Ok(-8.0));
    }

    #[test]
    fn fallible_passes_errors_through() {
        let objective = Fallible(sqrt_checked);
        assert_eq!(objective.call(4.0), Ok(2.0));
        assert_eq!(objective.call(-1.0), Err(NegativeInput(-1.0)));
    }

    #[test]
    fn references_are_objectives() {
        fn eval_twice<O: Objective>(objective: O, x: f64) -> Result<f64, O::Error> {
            Ok(objective.call(x)? + objective.call(x)?)
        }

        let objective = Function(|x: f64| x + 1.0);
        assert_eq!(eval_twice(&objective, 1.0), Ok(4.0));
        assert_eq!(objective.call(1.0), Ok(2.0));
    }
}
