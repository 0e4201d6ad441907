#![forbid(unsafe_code)]

//! Data space to cell space.
//!
//! A [`ScaleMapper`] stretches the extents over a target rectangle so that
//! the minimum lands on the first column/row and the maximum on the last.
//! Y is inverted: the data maximum is the top row.
//!
//! A degenerate axis (every value equal) gets a scale of zero and collapses
//! onto the first column (or top row). Offsets are clamped into the
//! rectangle, so no input can produce a coordinate outside it.

use cellplot_core::geometry::Rect;

use crate::extents::{AxisExtents, Extents};
use crate::series::Point2D;

/// First codepoint of the Braille Patterns block (no dots raised).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bit for sub-cell `(column, row)`.
///
/// Dots are numbered down the left column (1, 2, 3, 7) then the right
/// column (4, 5, 6, 8).
const DOT_BITS: [[u8; 4]; 2] = [[0, 1, 2, 6], [3, 4, 5, 7]];

/// Sub-cell columns per character cell.
pub const SUB_COLUMNS: u8 = 2;
/// Sub-cell rows per character cell.
pub const SUB_ROWS: u8 = 4;

/// A cell position plus a dot inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubCell {
    pub col: u16,
    pub row: u16,
    /// `0..SUB_COLUMNS`
    pub dot_x: u8,
    /// `0..SUB_ROWS`
    pub dot_y: u8,
}

impl SubCell {
    /// The Braille bit this dot raises.
    #[inline]
    pub fn bit(&self) -> u8 {
        1 << DOT_BITS[self.dot_x as usize][self.dot_y as usize]
    }
}

/// Maps points into a fixed rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    rect: Rect,
    x: AxisExtents,
    y: AxisExtents,
    half_scale_x: f64,
    half_scale_y: f64,
}

/// `a/2 - b/2`: stays finite for any pair of finite values.
#[inline]
fn half_diff(a: f64, b: f64) -> f64 {
    a * 0.5 - b * 0.5
}

/// Cells per half data unit.
fn axis_scale(axis: &AxisExtents, cells: u16) -> f64 {
    if axis.is_degenerate() {
        return 0.0;
    }
    let scale = f64::from(cells.saturating_sub(1)) / half_diff(axis.max, axis.min);
    if scale.is_finite() { scale } else { 0.0 }
}

/// Offset from the first cell, within `[0, limit]`.
fn clamp_offset(raw: f64, limit: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, limit)
    }
}

impl ScaleMapper {
    pub fn new(extents: Extents, rect: Rect) -> Self {
        Self {
            rect,
            x: extents.x,
            y: extents.y,
            half_scale_x: axis_scale(&extents.x, rect.width),
            half_scale_y: axis_scale(&extents.y, rect.height),
        }
    }

    /// Target rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Cells per data unit on each axis. Zero on a degenerate axis.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.half_scale_x * 0.5, self.half_scale_y * 0.5)
    }

    fn raw(&self, p: &Point2D) -> (f64, f64) {
        let max_x = f64::from(self.rect.width.saturating_sub(1));
        let max_y = f64::from(self.rect.height.saturating_sub(1));
        (
            clamp_offset(half_diff(p.x, self.x.min) * self.half_scale_x, max_x),
            clamp_offset(half_diff(self.y.max, p.y) * self.half_scale_y, max_y),
        )
    }

    /// Nearest cell for `p`.
    ///
    /// On an empty rectangle this is the rectangle origin; callers skip
    /// drawing in that case.
    pub fn map(&self, p: &Point2D) -> (u16, u16) {
        let (rx, ry) = self.raw(p);
        (
            self.rect.x.saturating_add(rx.round() as u16),
            self.rect.y.saturating_add(ry.round() as u16),
        )
    }

    /// Nearest cell for `p` (same cell as [`map`](Self::map)) plus a 2x4
    /// dot picked from the fractional part of the unrounded offset.
    pub fn map_sub_cell(&self, p: &Point2D) -> SubCell {
        let (rx, ry) = self.raw(p);
        let dot_x = ((rx.fract() * f64::from(SUB_COLUMNS)) as u8).min(SUB_COLUMNS - 1);
        let dot_y = ((ry.fract() * f64::from(SUB_ROWS)) as u8).min(SUB_ROWS - 1);
        SubCell {
            col: self.rect.x.saturating_add(rx.round() as u16),
            row: self.rect.y.saturating_add(ry.round() as u16),
            dot_x,
            dot_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents(x: (f64, f64), y: (f64, f64)) -> Extents {
        Extents {
            x: AxisExtents::new(x.0, x.1),
            y: AxisExtents::new(y.0, y.1),
        }
    }

    #[test]
    fn corners_map_to_rect_corners() {
        let m = ScaleMapper::new(extents((0.0, 10.0), (0.0, 10.0)), Rect::new(5, 2, 11, 6));
        assert_eq!(m.map(&Point2D::new(0.0, 10.0)), (5, 2));
        assert_eq!(m.map(&Point2D::new(10.0, 0.0)), (15, 7));
    }

    #[test]
    fn y_is_inverted() {
        let m = ScaleMapper::new(extents((0.0, 1.0), (0.0, 4.0)), Rect::new(0, 0, 2, 5));
        let (_, top) = m.map(&Point2D::new(0.0, 4.0));
        let (_, bottom) = m.map(&Point2D::new(0.0, 0.0));
        assert!(top < bottom);
        assert_eq!(m.map(&Point2D::new(0.0, 1.0)).1, 3);
    }

    #[test]
    fn degenerate_axis_collapses() {
        let m = ScaleMapper::new(extents((3.0, 3.0), (0.0, 1.0)), Rect::new(4, 0, 20, 10));
        assert_eq!(m.scale().0, 0.0);
        assert_eq!(m.map(&Point2D::new(3.0, 0.5)).0, 4);

        let m = ScaleMapper::new(extents((0.0, 1.0), (5.0, 5.0)), Rect::new(0, 7, 20, 10));
        assert_eq!(m.map(&Point2D::new(0.2, 5.0)).1, 7);
        assert_eq!(m.map(&Point2D::new(0.9, 5.0)).1, 7);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let m = ScaleMapper::new(extents((0.0, 1.0), (0.0, 1.0)), Rect::new(0, 0, 10, 10));
        assert_eq!(m.map(&Point2D::new(-50.0, 80.0)), (0, 0));
        assert_eq!(m.map(&Point2D::new(50.0, -80.0)), (9, 9));
        assert_eq!(m.map(&Point2D::new(f64::NAN, f64::INFINITY)), (0, 0));
    }

    #[test]
    fn huge_span_stays_finite() {
        let m = ScaleMapper::new(extents((f64::MIN, f64::MAX), (0.0, 1.0)), Rect::new(0, 0, 10, 2));
        let (col, _) = m.map(&Point2D::new(f64::MAX, 0.0));
        assert!(col <= 9);
    }

    #[test]
    fn huge_finite_span_still_spreads() {
        let m = ScaleMapper::new(extents((-1e308, 1e308), (0.0, 1.0)), Rect::new(0, 0, 11, 2));
        assert!(m.scale().0 > 0.0);
        assert_eq!(m.map(&Point2D::new(-1e308, 0.0)).0, 0);
        assert_eq!(m.map(&Point2D::new(0.0, 0.0)).0, 5);
        assert_eq!(m.map(&Point2D::new(1e308, 0.0)).0, 10);
        assert_eq!(m.map_sub_cell(&Point2D::new(1e308, 0.0)).col, 10);
    }

    #[test]
    fn sub_cell_shares_the_glyph_cell() {
        let m = ScaleMapper::new(extents((0.0, 3.0), (5.0, 20.0)), Rect::new(12, 1, 25, 15));
        for p in [(0.0, 10.0), (1.0, 20.0), (2.0, 15.0), (3.0, 5.0), (0.7, 6.1)] {
            let p = Point2D::from(p);
            let sub = m.map_sub_cell(&p);
            assert_eq!((sub.col, sub.row), m.map(&p), "{p:?}");
        }
        // (2, 15): row offset (20 - 15) * 14/15 = 4.67 rounds to row 6; the dot comes from 0.67.
        let sub = m.map_sub_cell(&Point2D::new(2.0, 15.0));
        assert_eq!((sub.col, sub.row, sub.dot_x, sub.dot_y), (28, 6, 0, 2));
    }

    #[test]
    fn single_cell_rect() {
        let m = ScaleMapper::new(extents((0.0, 1.0), (0.0, 1.0)), Rect::new(3, 3, 1, 1));
        assert_eq!(m.map(&Point2D::new(1.0, 0.0)), (3, 3));
        let sub = m.map_sub_cell(&Point2D::new(1.0, 0.0));
        assert_eq!((sub.col, sub.row, sub.dot_x, sub.dot_y), (3, 3, 0, 0));
    }

    #[test]
    fn sub_cell_dots() {
        // 5 columns over [0, 4]: one data unit per cell.
        let m = ScaleMapper::new(extents((0.0, 4.0), (0.0, 4.0)), Rect::new(0, 0, 5, 5));
        let a = m.map_sub_cell(&Point2D::new(1.0, 4.0));
        assert_eq!((a.col, a.row, a.dot_x, a.dot_y), (1, 0, 0, 0));
        assert_eq!(a.bit(), 0x01);

        // Offsets (1.5, 0.75) round to cell (2, 1); the dot comes from the fractions.
        let b = m.map_sub_cell(&Point2D::new(1.5, 3.25));
        assert_eq!((b.col, b.row, b.dot_x, b.dot_y), (2, 1, 1, 3));
        assert_eq!(b.bit(), 0x80);

        let c = m.map_sub_cell(&Point2D::new(0.0, 3.5));
        assert_eq!((c.dot_x, c.dot_y), (0, 2));
        assert_eq!(c.bit(), 0x04);
    }

    #[test]
    fn dot_bits_cover_byte() {
        let mut all = 0u8;
        for dot_x in 0..SUB_COLUMNS {
            for dot_y in 0..SUB_ROWS {
                let bit = SubCell { col: 0, row: 0, dot_x, dot_y }.bit();
                assert_eq!(all & bit, 0, "dot bits overlap");
                all |= bit;
            }
        }
        assert_eq!(all, 0xFF);
    }
}
