#![forbid(unsafe_code)]

use crate::borders::{BorderSet, BorderType, Borders};
use crate::{Widget, draw_text_span, set_style_area};
use cellplot_core::geometry::Rect;
use cellplot_render::buffer::Buffer;
use cellplot_render::cell::Cell;
use cellplot_style::Style;
use unicode_width::UnicodeWidthStr;

/// A widget that draws optional borders, a title, and a background.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    borders: Borders,
    border_style: Style,
    border_type: BorderType,
    title: Option<&'a str>,
    title_alignment: Alignment,
    title_style: Style,
    style: Style,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    /// Align text to the left.
    Left,
    /// Center text horizontally.
    Center,
    /// Align text to the right.
    Right,
}

impl<'a> Block<'a> {
    /// Create a new block with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with all borders enabled.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    /// Set which borders to render.
    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the style applied to border characters.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the border character set.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the horizontal alignment of the title.
    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Style layered over the border style for the title text.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Set the background style for the entire block area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn has_title(&self) -> bool {
        self.title.is_some_and(|t| !t.is_empty())
    }

    /// Content area inside the borders.
    ///
    /// Without a top border a non-empty title claims the first row.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = area;

        if self.borders.contains(Borders::LEFT) {
            inner.x = inner.x.saturating_add(1);
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::TOP) || self.has_title() {
            inner.y = inner.y.saturating_add(1);
            inner.height = inner.height.saturating_sub(1);
        }
        if self.borders.contains(Borders::RIGHT) {
            inner.width = inner.width.saturating_sub(1);
        }
        if self.borders.contains(Borders::BOTTOM) {
            inner.height = inner.height.saturating_sub(1);
        }

        inner
    }

    fn border_cell(&self, c: char) -> Cell {
        let mut cell = Cell::from_char(c);
        self.border_style.apply_to(&mut cell);
        cell
    }

    fn render_borders(&self, area: Rect, buf: &mut Buffer) {
        let set: BorderSet = self.border_type.to_border_set();
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                buf.set(right, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                buf.set(x, bottom, self.border_cell(set.horizontal));
            }
        }

        // Corners last so they replace the edge glyphs.
        let corners = [
            (Borders::LEFT | Borders::TOP, area.x, area.y, set.top_left),
            (Borders::RIGHT | Borders::TOP, right, area.y, set.top_right),
            (Borders::LEFT | Borders::BOTTOM, area.x, bottom, set.bottom_left),
            (Borders::RIGHT | Borders::BOTTOM, right, bottom, set.bottom_right),
        ];
        for (sides, x, y, glyph) in corners {
            if self.borders.contains(sides) {
                buf.set(x, y, self.border_cell(glyph));
            }
        }
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title.filter(|t| !t.is_empty()) else {
            return;
        };

        let left = area.x + u16::from(self.borders.contains(Borders::LEFT));
        let right = area
            .right()
            .saturating_sub(u16::from(self.borders.contains(Borders::RIGHT)));
        if right <= left {
            return;
        }
        let available = (right - left) as usize;
        let shown = UnicodeWidthStr::width(title).min(available) as u16;

        let x = match self.title_alignment {
            Alignment::Left => left,
            Alignment::Center => left + (available as u16 - shown) / 2,
            Alignment::Right => right - shown,
        };

        let style = self.border_style.patch(self.title_style);
        draw_text_span(buf, x, area.y, title, style, right);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Block",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        set_style_area(buf, area, self.style);
        self.render_borders(area, buf);
        self.render_title(area, buf);
    }
}
