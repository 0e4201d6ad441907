#![forbid(unsafe_code)]

//! Axis layout.
//!
//! Tick spacing is decided from label widths alone: the Y axis gets a guide
//! line every second row, the X axis one tick per label width. X labels
//! alternate between two rows below the tick row so that wide neighbours do
//! not collide.
//!
//! Inside the inner rectangle `(x, y, w, h)` the rows are:
//!
//! ```text
//! y            Y-axis description
//! y+1 ..       Y guide lines (label | rule glyph), every 2 rows
//! y+h-4        X tick glyphs
//! y+h-3, y+h-2 X tick labels (even ticks on the first row, odd on the second)
//! y+h-1        X-axis description
//! ```
//!
//! The rightmost column is kept free. Counts are floored at one, so a
//! surface that is too small still yields a (possibly overlapping) layout.

use cellplot_core::geometry::Rect;
use cellplot_render::display_width;

use crate::extents::{AxisExtents, Extents};

/// Cells between the widest Y label and the X axis.
pub const GUTTER_PADDING: u16 = 3;

/// Rows below the guide lines: tick row, two label rows, description row.
pub const X_AXIS_ROWS: u16 = 4;

/// A labelled mark on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Absolute column (X axis) or row (Y axis).
    pub position: u16,
    /// Data value at the mark.
    pub value: f64,
    /// Formatted value.
    pub label: String,
}

fn label_width(value: f64, fmt: &dyn Fn(f64) -> String) -> u16 {
    display_width(&fmt(value)).min(u16::MAX as usize) as u16
}

/// Width of the left gutter that holds Y labels.
pub fn gutter_width(y: &AxisExtents, fmt: &dyn Fn(f64) -> String) -> u16 {
    label_width(y.min, fmt)
        .max(label_width(y.max, fmt))
        .saturating_add(GUTTER_PADDING)
}

/// Spacing between X ticks: the wider of the two end labels, at least 1.
pub fn label_offset(x: &AxisExtents, fmt: &dyn Fn(f64) -> String) -> u16 {
    label_width(x.min, fmt).max(label_width(x.max, fmt)).max(1)
}

/// Number of Y guide lines for `rows` available rows.
#[inline]
pub fn y_line_count(rows: u16) -> u16 {
    (rows / 2).max(1)
}

/// Number of X intervals for `width` columns at `offset` spacing.
#[inline]
pub fn x_line_count(width: u16, offset: u16) -> u16 {
    let offset = offset.max(1);
    (width.saturating_sub(offset) / offset).max(1)
}

/// Y ticks from the top row downwards, `max` first.
pub fn layout_y_axis(
    y: &AxisExtents,
    top: u16,
    rows: u16,
    fmt: &dyn Fn(f64) -> String,
) -> Vec<Tick> {
    let lines = y_line_count(rows);
    let step = if lines > 1 {
        y.span() / f64::from(lines - 1)
    } else {
        0.0
    };
    (0..lines)
        .map(|i| {
            let value = y.max - f64::from(i) * step;
            Tick {
                position: top.saturating_add(i.saturating_mul(2)),
                value,
                label: fmt(value),
            }
        })
        .collect()
}

/// X ticks from `left`, `min` first; `x_line_count + 1` marks.
pub fn layout_x_axis(
    x: &AxisExtents,
    left: u16,
    width: u16,
    offset: u16,
    fmt: &dyn Fn(f64) -> String,
) -> Vec<Tick> {
    let offset = offset.max(1);
    let lines = x_line_count(width, offset);
    let step = x.span() / f64::from(lines);
    let first = left.saturating_add(offset / 2);
    (0..=lines)
        .map(|i| {
            let value = x.min + f64::from(i) * step;
            Tick {
                position: first.saturating_add(i.saturating_mul(offset)),
                value,
                label: fmt(value),
            }
        })
        .collect()
}

/// Everything a plot needs to draw its frame and place its points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    /// Row for the Y-axis description.
    pub y_description: Rect,
    /// Row for the X-axis description.
    pub x_description: Rect,
    /// Width of the Y label gutter, rule glyph included.
    pub gutter: u16,
    /// Column of the Y rule glyph.
    pub rule_column: u16,
    pub y_ticks: Vec<Tick>,
    /// Row of the X tick glyphs.
    pub x_axis_row: u16,
    /// Spacing between X ticks.
    pub label_offset: u16,
    pub x_ticks: Vec<Tick>,
    /// Where points land, clipped to the inner rectangle.
    pub plot: Rect,
}

impl PlotLayout {
    pub fn compute(
        inner: Rect,
        extents: &Extents,
        x_fmt: &dyn Fn(f64) -> String,
        y_fmt: &dyn Fn(f64) -> String,
    ) -> Self {
        let width = inner.width.saturating_sub(1);
        let gutter = gutter_width(&extents.y, y_fmt);
        let offset = label_offset(&extents.x, x_fmt);

        let top = inner.y.saturating_add(1);
        let rows = inner.height.saturating_sub(X_AXIS_ROWS);
        let y_ticks = layout_y_axis(&extents.y, top, rows, y_fmt);

        let axis_left = inner.x.saturating_add(gutter);
        let x_axis_row = inner.y.saturating_add(rows);
        let x_ticks = layout_x_axis(
            &extents.x,
            axis_left,
            width.saturating_sub(gutter),
            offset,
            x_fmt,
        );

        let x_lines = x_ticks.len().saturating_sub(1) as u16;
        let y_lines = y_ticks.len() as u16;
        let plot_left = axis_left.saturating_add(offset / 2);
        let plot = Rect::new(
            plot_left,
            top,
            x_lines.saturating_mul(offset).saturating_add(1),
            (y_lines - 1).saturating_mul(2).saturating_add(1),
        )
        .intersection(&inner);

        Self {
            y_description: Rect::new(inner.x, inner.y, width, 1),
            x_description: Rect::new(
                inner.x,
                inner.bottom().saturating_sub(1),
                width,
                1,
            ),
            gutter,
            rule_column: axis_left.saturating_sub(1),
            y_ticks,
            x_axis_row,
            label_offset: offset,
            x_ticks,
            plot,
        }
    }

    /// Row of the label for the `index`-th X tick.
    #[inline]
    pub fn x_label_row(&self, index: usize) -> u16 {
        self.x_axis_row.saturating_add(1 + (index % 2) as u16)
    }

    /// Column where the `index`-th X tick's label starts.
    #[inline]
    pub fn x_label_column(&self, index: usize) -> u16 {
        self.x_ticks
            .get(index)
            .map_or(0, |t| t.position.saturating_sub(self.label_offset / 2))
    }
}
