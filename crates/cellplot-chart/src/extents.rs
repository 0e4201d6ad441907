#![forbid(unsafe_code)]

//! Per-axis bounds of a series.

use crate::series::Point2D;

/// Closed range `[min, max]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtents {
    pub min: f64,
    pub max: f64,
}

impl AxisExtents {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`. Zero for a degenerate axis.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every value on this axis was equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Empty accumulator: any real value replaces both bounds.
    const SEED: Self = Self {
        min: f64::MAX,
        max: f64::MIN,
    };

    #[inline]
    fn include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub x: AxisExtents,
    pub y: AxisExtents,
}

impl Extents {
    /// Single pass over `points`.
    ///
    /// The accumulator starts from the largest finite sentinels, so an empty
    /// slice yields `min > max`. Validated series never hit that case.
    pub fn of(points: &[Point2D]) -> Self {
        let mut x = AxisExtents::SEED;
        let mut y = AxisExtents::SEED;
        for p in points {
            x.include(p.x);
            y.include(p.y);
        }
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2D> {
        raw.iter().copied().map(Point2D::from).collect()
    }

    #[test]
    fn example_series_extents() {
        let e = Extents::of(&pts(&[(0.0, 10.0), (1.0, 20.0), (2.0, 15.0), (3.0, 5.0)]));
        assert_eq!(e.x, AxisExtents::new(0.0, 3.0));
        assert_eq!(e.y, AxisExtents::new(5.0, 20.0));
    }

    #[test]
    fn all_negative_values() {
        let e = Extents::of(&pts(&[(-5.0, -1.0), (-2.0, -9.0)]));
        assert_eq!(e.x, AxisExtents::new(-5.0, -2.0));
        assert_eq!(e.y, AxisExtents::new(-9.0, -1.0));
    }

    #[test]
    fn equal_values_are_degenerate() {
        let e = Extents::of(&pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]));
        assert!(e.y.is_degenerate());
        assert_eq!(e.y.span(), 0.0);
        assert!(!e.x.is_degenerate());
    }

    #[test]
    fn empty_slice_keeps_seed() {
        let e = Extents::of(&[]);
        assert!(e.x.min > e.x.max);
    }

    #[test]
    fn contains_is_inclusive() {
        let axis = AxisExtents::new(1.0, 2.0);
        assert!(axis.contains(1.0));
        assert!(axis.contains(2.0));
        assert!(!axis.contains(2.5));
    }
}
