use super::{Interval, Point};

/// Events emitted by the golden section solver.
///
/// The solver emits [`Event::Initialized`] once both interior points have been
/// evaluated, then one [`Event::Contracted`] per contraction of the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Both interior points of the initial bracket were evaluated.
    Initialized {
        /// The initial interval (entry 0 of the history).
        interval: Interval,

        /// The interior point nearer the lower bound.
        left: Point,

        /// The interior point nearer the upper bound.
        right: Point,
    },

    /// The bracket was contracted and one new interior point was evaluated.
    Contracted {
        /// Contraction count, starting at 1.
        iter: usize,

        /// The interval after this contraction.
        interval: Interval,

        /// The newly evaluated interior point.
        probe: Point,

        /// The interior point carried over from the previous bracket.
        other: Point,
    },
}

impl Event {
    /// Returns the number of contractions performed so far.
    #[must_use]
    pub fn iters(&self) -> usize {
        match self {
            Self::Initialized { .. } => 0,
            Self::Contracted { iter, .. } => *iter,
        }
    }

    /// Returns the current interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        match self {
            Self::Initialized { interval, .. } | Self::Contracted { interval, .. } => *interval,
        }
    }

    /// Returns the most recently evaluated point.
    ///
    /// During initialization the upper interior point is evaluated second.
    #[must_use]
    pub fn probe(&self) -> Point {
        match self {
            Self::Initialized { right, .. } => *right,
            Self::Contracted { probe, .. } => *probe,
        }
    }
}
