use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Config {
    /// Tolerance used by [`Config::default`].
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Iteration limit used by [`Config::default`] and [`Config::with_tolerance`].
    ///
    /// A bracket of width `f64::MAX` shrinks below `1e-300` well within this
    /// many contractions.
    pub const DEFAULT_MAX_ITERS: usize = 5000;

    /// Creates a new config with a validated tolerance.
    ///
    /// The search stops once the bracket width is at most `tolerance`, or
    /// after `max_iters` contractions, whichever comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-positive or non-finite.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Creates a config with the given tolerance and the default iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-positive or non-finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, Self::DEFAULT_MAX_ITERS)
    }

    /// Returns the bracket width at which the search is converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of contractions.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_tolerance() {
        let config = Config::new(1e-9, 50).unwrap();
        assert_eq!(config.tolerance(), 1e-9);
        assert_eq!(config.max_iters(), 50);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-6, 10), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_non_finite_tolerance() {
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::with_tolerance(f64::INFINITY),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn default_uses_documented_values() {
        let config = Config::default();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.max_iters(), Config::DEFAULT_MAX_ITERS);
        assert_eq!(Config::with_tolerance(1e-6), Ok(config));
    }
}
