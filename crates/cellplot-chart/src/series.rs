#![forbid(unsafe_code)]

//! Validated data series.

use crate::error::{InvalidSeries, SeriesResult};

/// Smallest series a plot accepts.
pub const MIN_POINTS: usize = 2;

/// A sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// An ordered, validated sequence of points.
///
/// Order is drawing order. A `DataSeries` always holds at least
/// [`MIN_POINTS`] finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    points: Vec<Point2D>,
}

impl DataSeries {
    /// Validate typed points.
    pub fn new(points: Vec<Point2D>) -> SeriesResult<Self> {
        if points.len() < MIN_POINTS {
            return Err(InvalidSeries::TooFewPoints {
                got: points.len(),
                min: MIN_POINTS,
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InvalidSeries::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Validate untyped rows, each of which must hold exactly `[x, y]`.
    ///
    /// Rows are checked in order; the first malformed row is reported.
    pub fn from_rows<I, R>(rows: I) -> SeriesResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut points = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            match *row.as_ref() {
                [x, y] => points.push(Point2D::new(x, y)),
                ref other => {
                    return Err(InvalidSeries::WrongDimension {
                        index,
                        got: other.len(),
                    });
                }
            }
        }
        Self::new(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}

impl<'a> IntoIterator for &'a DataSeries {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<Point2D>> for DataSeries {
    type Error = InvalidSeries;

    fn try_from(points: Vec<Point2D>) -> SeriesResult<Self> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_points() {
        let series = DataSeries::from_rows([[0.0, 1.0], [1.0, 2.0]]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[1], Point2D::new(1.0, 2.0));
    }

    #[test]
    fn rejects_single_point() {
        let err = DataSeries::from_rows([[0.0, 1.0]]).unwrap_err();
        assert_eq!(err, InvalidSeries::TooFewPoints { got: 1, min: 2 });
    }

    #[test]
    fn rejects_empty() {
        let err = DataSeries::new(Vec::new()).unwrap_err();
        assert_eq!(err, InvalidSeries::TooFewPoints { got: 0, min: 2 });
    }

    #[test]
    fn rejects_three_components() {
        let rows: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![1.0, 2.0, 3.0]];
        let err = DataSeries::from_rows(&rows).unwrap_err();
        assert_eq!(err, InvalidSeries::WrongDimension { index: 1, got: 3 });
    }

    #[test]
    fn dimension_checked_before_count() {
        let rows: Vec<Vec<f64>> = vec![vec![5.0]];
        let err = DataSeries::from_rows(&rows).unwrap_err();
        assert_eq!(err, InvalidSeries::WrongDimension { index: 0, got: 1 });
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let err = DataSeries::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, f64::NAN),
        ])
        .unwrap_err();
        assert_eq!(err, InvalidSeries::NonFinite { index: 1 });

        let err = DataSeries::from_rows([[f64::INFINITY, 0.0], [1.0, 1.0]]).unwrap_err();
        assert_eq!(err, InvalidSeries::NonFinite { index: 0 });
    }

    #[test]
    fn preserves_order() {
        let points: Vec<Point2D> = [(3.0, 1.0), (1.0, 2.0), (2.0, 0.0)]
            .into_iter()
            .map(Point2D::from)
            .collect();
        let series = DataSeries::try_from(points.clone()).unwrap();
        assert_eq!(series.into_points(), points);
    }
}
