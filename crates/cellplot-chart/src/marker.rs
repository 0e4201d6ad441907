#![forbid(unsafe_code)]

//! Point renderers.
//!
//! [`GlyphRenderer`] writes one glyph per point and lets later points win a
//! shared cell. [`BrailleRenderer`] packs up to eight points per cell into a
//! Braille pattern: dot bits are OR-ed together and the cell keeps the style
//! of the first point that reached it.

use std::collections::BTreeMap;

use cellplot_render::buffer::Buffer;
use cellplot_render::cell::Cell;
use cellplot_style::Style;

use crate::scale::{BRAILLE_BASE, ScaleMapper};
use crate::series::Point2D;

/// Default point glyph.
pub const DEFAULT_POINT_GLYPH: char = '•';

/// How points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// One glyph per point.
    Glyph(char),
    /// 2x4 sub-cell dots per character cell.
    Braille,
}

impl Default for Marker {
    fn default() -> Self {
        Self::Glyph(DEFAULT_POINT_GLYPH)
    }
}

/// Draws mapped points into a buffer.
pub trait PointRenderer {
    /// Render `points` in order. `style` is called at most once per point.
    fn render(
        &self,
        points: &[Point2D],
        mapper: &ScaleMapper,
        style: &dyn Fn(&Point2D) -> Style,
        buf: &mut Buffer,
    );
}

/// Single glyph per point, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRenderer {
    glyph: char,
}

impl GlyphRenderer {
    pub const fn new(glyph: char) -> Self {
        Self { glyph }
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_GLYPH)
    }
}

impl PointRenderer for GlyphRenderer {
    fn render(
        &self,
        points: &[Point2D],
        mapper: &ScaleMapper,
        style: &dyn Fn(&Point2D) -> Style,
        buf: &mut Buffer,
    ) {
        if mapper.rect().is_empty() {
            return;
        }
        for p in points {
            let (col, row) = mapper.map(p);
            let mut cell = Cell::from_char(self.glyph);
            style(p).apply_to(&mut cell);
            buf.set(col, row, cell);
        }
    }
}

/// One aggregated Braille cell before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrailleCell {
    /// OR of every dot that landed here.
    pub mask: u8,
    /// Style of the first point that landed here.
    pub style: Style,
}

impl BrailleCell {
    /// The pattern glyph for this mask.
    pub fn glyph(&self) -> char {
        char::from_u32(BRAILLE_BASE | u32::from(self.mask)).unwrap_or(' ')
    }
}

/// Sub-cell renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrailleRenderer;

impl BrailleRenderer {
    /// Fold points into per-cell masks, keyed `(row, col)` so iteration is
    /// row-major.
    pub fn accumulate(
        points: &[Point2D],
        mapper: &ScaleMapper,
        style: &dyn Fn(&Point2D) -> Style,
    ) -> BTreeMap<(u16, u16), BrailleCell> {
        let mut cells: BTreeMap<(u16, u16), BrailleCell> = BTreeMap::new();
        for p in points {
            let sub = mapper.map_sub_cell(p);
            cells
                .entry((sub.row, sub.col))
                .or_insert_with(|| BrailleCell {
                    mask: 0,
                    style: style(p),
                })
                .mask |= sub.bit();
        }
        cells
    }
}

impl PointRenderer for BrailleRenderer {
    fn render(
        &self,
        points: &[Point2D],
        mapper: &ScaleMapper,
        style: &dyn Fn(&Point2D) -> Style,
        buf: &mut Buffer,
    ) {
        if mapper.rect().is_empty() {
            return;
        }
        for ((row, col), acc) in Self::accumulate(points, mapper, style) {
            let mut cell = Cell::from_char(acc.glyph());
            acc.style.apply_to(&mut cell);
            buf.set(col, row, cell);
        }
    }
}

impl Marker {
    /// Render with the strategy this marker selects.
    pub fn render(
        &self,
        points: &[Point2D],
        mapper: &ScaleMapper,
        style: &dyn Fn(&Point2D) -> Style,
        buf: &mut Buffer,
    ) {
        match *self {
            Self::Glyph(glyph) => GlyphRenderer::new(glyph).render(points, mapper, style, buf),
            Self::Braille => BrailleRenderer.render(points, mapper, style, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as Counter;

    use super::*;
    use crate::extents::{AxisExtents, Extents};
    use cellplot_core::geometry::Rect;
    use cellplot_render::cell::PackedRgba;
    use cellplot_render::present::buffer_to_text;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2D> {
        raw.iter().copied().map(Point2D::from).collect()
    }

    fn mapper(points: &[Point2D], rect: Rect) -> ScaleMapper {
        ScaleMapper::new(Extents::of(points), rect)
    }

    fn plain(_: &Point2D) -> Style {
        Style::new()
    }

    #[test]
    fn glyph_renderer_places_points() {
        let points = pts(&[(0.0, 0.0), (2.0, 2.0)]);
        let mut buf = Buffer::new(3, 3);
        GlyphRenderer::new('*').render(&points, &mapper(&points, buf.bounds()), &plain, &mut buf);
        assert_eq!(buffer_to_text(&buf), "  *\n   \n*  ");
    }

    #[test]
    fn glyph_last_write_wins() {
        let points = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        let colors = [PackedRgba::RED, PackedRgba::BLUE, PackedRgba::GREEN];
        let calls = Counter::new(0usize);
        let style = |_: &Point2D| {
            let i = calls.get();
            calls.set(i + 1);
            Style::new().fg(colors[i])
        };
        let mut buf = Buffer::new(2, 2);
        GlyphRenderer::default().render(&points, &mapper(&points, buf.bounds()), &style, &mut buf);
        assert_eq!(calls.get(), 3);
        let cell = buf.get(0, 1).unwrap();
        assert_eq!(cell.symbol(), Some(DEFAULT_POINT_GLYPH));
        assert_eq!(cell.fg, PackedRgba::BLUE);
    }

    #[test]
    fn braille_ors_bits_and_keeps_first_style() {
        // Rect 3x1 over x in [0, 2]: offsets 1.2 and 0.7 both round to column 1.
        let points = pts(&[(1.2, 1.0), (0.7, 1.0), (1.2, 0.0)]);
        let extents = Extents {
            x: AxisExtents::new(0.0, 2.0),
            y: AxisExtents::new(0.0, 1.0),
        };
        let m = ScaleMapper::new(extents, Rect::new(0, 0, 3, 1));
        let style = |p: &Point2D| {
            if p.x > 1.0 && p.y == 1.0 {
                Style::new().fg(PackedRgba::RED)
            } else {
                Style::new().fg(PackedRgba::BLUE)
            }
        };
        let cells = BrailleRenderer::accumulate(&points, &m, &style);
        assert_eq!(cells.len(), 1);
        let acc = cells[&(0, 1)];
        // 1.2 -> dot (0,0) = 0x01, 0.7 -> dot (1,0) = 0x08.
        assert_eq!(acc.mask, 0x01 | 0x08);
        assert_eq!(acc.style.fg, Some(PackedRgba::RED));
        assert_eq!(acc.glyph(), '\u{2809}');
    }

    #[test]
    fn braille_style_called_once_per_cell() {
        let points = pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (9.0, 9.0)]);
        let calls = Counter::new(0usize);
        let style = |_: &Point2D| {
            calls.set(calls.get() + 1);
            Style::new()
        };
        let mut buf = Buffer::new(10, 10);
        BrailleRenderer.render(&points, &mapper(&points, buf.bounds()), &style, &mut buf);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn braille_writes_pattern_glyph() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let mut buf = Buffer::new(2, 2);
        BrailleRenderer.render(&points, &mapper(&points, buf.bounds()), &plain, &mut buf);
        assert_eq!(buf.get(1, 0).unwrap().symbol(), Some('\u{2801}'));
        assert_eq!(buf.get(0, 1).unwrap().symbol(), Some('\u{2801}'));
        assert!(buf.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn more_points_than_cells() {
        let points: Vec<Point2D> = (0..500)
            .map(|i| Point2D::new(f64::from(i), f64::from(i % 7)))
            .collect();
        let mut buf = Buffer::new(4, 2);
        let m = mapper(&points, buf.bounds());
        Marker::Braille.render(&points, &m, &plain, &mut buf);
        Marker::default().render(&points, &m, &plain, &mut buf);
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let mut buf = Buffer::new(3, 3);
        let m = mapper(&points, Rect::new(1, 1, 0, 0));
        Marker::Braille.render(&points, &m, &plain, &mut buf);
        Marker::Glyph('x').render(&points, &m, &plain, &mut buf);
        assert!(buf.cells().iter().all(|c| c.is_empty()));
    }
}
