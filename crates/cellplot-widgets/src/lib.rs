#![forbid(unsafe_code)]

//! Widgets for cellplot: the [`Widget`] trait, [`Block`](block::Block)
//! chrome, and the text drawing helpers charts build on.

pub mod block;
pub mod borders;

pub use block::{Alignment, Block};
pub use borders::{BorderSet, BorderType, Borders};

use cellplot_core::geometry::Rect;
use cellplot_render::buffer::Buffer;
use cellplot_render::cell::Cell;
use cellplot_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect` and must
/// not write outside it.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Apply a style to a cell, keeping its content.
#[inline]
pub fn apply_style(cell: &mut Cell, style: Style) {
    style.apply_to(cell);
}

/// Apply a style to every cell in `area`.
pub fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span on a single line, stopping before `max_x`.
///
/// Zero-width graphemes are skipped and a wide grapheme that would cross
/// `max_x` ends the span. Returns the x position after the last drawn glyph.
pub fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x.saturating_add(w as u16) > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Draw `content` on row `row.y`, aligned within `row`'s horizontal span.
///
/// Text wider than the row is truncated from the right regardless of
/// alignment.
pub fn draw_aligned_text(
    buf: &mut Buffer,
    row: Rect,
    content: &str,
    style: Style,
    alignment: Alignment,
) -> u16 {
    if row.is_empty() {
        return row.x;
    }
    let text_width = UnicodeWidthStr::width(content).min(row.width as usize) as u16;
    let slack = row.width - text_width;
    let x = match alignment {
        Alignment::Left => row.x,
        Alignment::Center => row.x + slack / 2,
        Alignment::Right => row.x + slack,
    };
    draw_text_span(buf, x, row.y, content, style, row.right())
}
