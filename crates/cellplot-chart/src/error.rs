#![forbid(unsafe_code)]

//! Error types for the chart engine.

use thiserror::Error;

/// A data series that [`Plot::set_data`](crate::Plot::set_data) refused.
///
/// The plot keeps its previous series and extents whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSeries {
    /// Fewer points than a plot can scale.
    #[error("minimal number of points in data is {min}, got {got}")]
    TooFewPoints { got: usize, min: usize },

    /// A point without exactly two components.
    #[error("expected 2 components at index {index}, got {got}")]
    WrongDimension { index: usize, got: usize },

    /// A NaN or infinite component.
    #[error("non-finite component at index {index}")]
    NonFinite { index: usize },
}

impl InvalidSeries {
    /// Index of the offending point, when the error is about one point.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::TooFewPoints { .. } => None,
            Self::WrongDimension { index, .. } | Self::NonFinite { index } => Some(*index),
        }
    }
}

/// Result alias for series validation.
pub type SeriesResult<T> = std::result::Result<T, InvalidSeries>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_counts() {
        let err = InvalidSeries::TooFewPoints { got: 1, min: 2 };
        assert_eq!(err.to_string(), "minimal number of points in data is 2, got 1");

        let err = InvalidSeries::WrongDimension { index: 4, got: 3 };
        assert_eq!(err.to_string(), "expected 2 components at index 4, got 3");
        assert_eq!(err.index(), Some(4));
    }

    #[test]
    fn too_few_has_no_index() {
        assert_eq!(InvalidSeries::TooFewPoints { got: 0, min: 2 }.index(), None);
        assert_eq!(InvalidSeries::NonFinite { index: 7 }.index(), Some(7));
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<InvalidSeries>();
    }
}
