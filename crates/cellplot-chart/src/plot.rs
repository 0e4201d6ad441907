#![forbid(unsafe_code)]

//! The plot widget.
//!
//! [`Plot`] owns the current series and its extents plus all decoration.
//! Every draw recomputes layout from the series and the area it is given;
//! nothing derived is cached between draws.

use std::fmt;

use cellplot_core::event::MouseEvent;
use cellplot_core::geometry::Rect;
use cellplot_render::buffer::Buffer;
use cellplot_render::cell::{Cell, PackedRgba};
use cellplot_render::display_width;
use cellplot_style::Style;
use cellplot_widgets::{
    Alignment, Block, BorderType, Borders, Widget, draw_aligned_text, draw_text_span,
};

use crate::axis::PlotLayout;
use crate::error::InvalidSeries;
use crate::extents::Extents;
use crate::label::{LabelFn, default_formatter};
use crate::marker::Marker;
use crate::scale::ScaleMapper;
use crate::series::{DataSeries, Point2D};
use crate::style_fn::{StyleFn, uniform};

/// Text shown until a series has been accepted.
pub const DEFAULT_NO_DATA_TEXT: &str = "No Data...";

/// Rule glyph at the end of each Y guide line.
const Y_RULE_GLYPH: char = '-';
/// Tick glyph on the X axis row.
const X_TICK_GLYPH: char = '|';

/// What a plot made of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseOutcome {
    /// The event was outside the plot.
    Ignored,
    /// The event was inside the plot but needs no action.
    Consumed,
    /// Primary press on the title row: the host should focus this plot.
    FocusRequested,
}

/// A scatter plot with labelled axes.
///
/// ```
/// use cellplot_chart::{Marker, Plot};
/// use cellplot_core::geometry::Rect;
/// use cellplot_render::buffer::Buffer;
/// use cellplot_widgets::Widget;
///
/// let mut plot = Plot::new();
/// plot.set_marker(Marker::Braille);
/// plot.set_data([[0.0, 1.0], [1.0, 3.0], [2.0, 2.0]]).unwrap();
///
/// let mut buf = Buffer::new(40, 12);
/// plot.render(buf.bounds(), &mut buf);
/// ```
pub struct Plot {
    series: Option<DataSeries>,
    extents: Option<Extents>,
    point_style: StyleFn,
    x_label: LabelFn,
    y_label: LabelFn,
    x_axis_text: String,
    x_axis_alignment: Alignment,
    y_axis_text: String,
    y_axis_alignment: Alignment,
    marker: Marker,
    label_style: Style,
    axis_style: Style,
    no_data_text: String,
    no_data_style: Style,
    title: String,
    title_alignment: Alignment,
    border: bool,
    border_type: BorderType,
    border_style: Style,
    focused_border_style: Style,
    focused: bool,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

impl Plot {
    /// An empty plot with glyph markers.
    #[must_use]
    pub fn new() -> Self {
        let red = Style::new().fg(PackedRgba::RED);
        Self {
            series: None,
            extents: None,
            point_style: uniform(Style::new()),
            x_label: default_formatter(),
            y_label: default_formatter(),
            x_axis_text: String::new(),
            x_axis_alignment: Alignment::Left,
            y_axis_text: String::new(),
            y_axis_alignment: Alignment::Left,
            marker: Marker::default(),
            label_style: red,
            axis_style: Style::new(),
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
            no_data_style: red,
            title: String::new(),
            title_alignment: Alignment::Center,
            border: false,
            border_type: BorderType::Plain,
            border_style: Style::new(),
            focused_border_style: Style::new().bold(),
            focused: false,
        }
    }

    /// An empty plot with Braille markers.
    #[must_use]
    pub fn braille() -> Self {
        let mut plot = Self::new();
        plot.marker = Marker::Braille;
        plot
    }

    // --- data -----------------------------------------------------------

    /// Replace the series with `rows`, each exactly `[x, y]`.
    ///
    /// On error the previous series and extents are kept.
    pub fn set_data<I, R>(&mut self, rows: I) -> Result<(), InvalidSeries>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        self.accept(DataSeries::from_rows(rows))
    }

    /// Replace the series with typed points.
    ///
    /// On error the previous series and extents are kept.
    pub fn set_points(&mut self, points: Vec<Point2D>) -> Result<(), InvalidSeries> {
        self.accept(DataSeries::new(points))
    }

    /// Replace the series with one that is already validated.
    pub fn set_series(&mut self, series: DataSeries) {
        let extents = Extents::of(series.points());
        cellplot_core::debug!(
            points = series.len(),
            x_min = extents.x.min,
            x_max = extents.x.max,
            y_min = extents.y.min,
            y_max = extents.y.max,
            "series accepted"
        );
        self.extents = Some(extents);
        self.series = Some(series);
    }

    fn accept(&mut self, series: Result<DataSeries, InvalidSeries>) -> Result<(), InvalidSeries> {
        match series {
            Ok(series) => {
                self.set_series(series);
                Ok(())
            }
            Err(err) => {
                cellplot_core::warn!(error = %err, "series rejected, keeping previous data");
                Err(err)
            }
        }
    }

    /// Drop the series; the plot shows its no-data text again.
    pub fn clear_data(&mut self) {
        self.series = None;
        self.extents = None;
    }

    /// Current series, if any.
    #[must_use]
    pub fn data(&self) -> Option<&DataSeries> {
        self.series.as_ref()
    }

    /// Extents of the current series, if any.
    #[must_use]
    pub fn extents(&self) -> Option<Extents> {
        self.extents
    }

    // --- callbacks ------------------------------------------------------

    /// Set the X and Y label formatters.
    pub fn set_axis_label_formatters<X, Y>(&mut self, x: X, y: Y) -> &mut Self
    where
        X: Fn(f64) -> String + Send + Sync + 'static,
        Y: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.x_label = Box::new(x);
        self.y_label = Box::new(y);
        self
    }

    /// Set the per-point style callback.
    pub fn set_point_style<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Point2D) -> Style + Send + Sync + 'static,
    {
        self.point_style = Box::new(f);
        self
    }

    // --- decoration -----------------------------------------------------

    /// Text centred in the inner area while there is no data.
    pub fn set_no_data_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.no_data_text = text.into();
        self
    }

    /// Style of the no-data text.
    pub fn set_no_data_style(&mut self, style: Style) -> &mut Self {
        self.no_data_style = style;
        self
    }

    /// Description drawn on the last inner row.
    pub fn set_x_axis_text(&mut self, text: impl Into<String>, alignment: Alignment) -> &mut Self {
        self.x_axis_text = text.into();
        self.x_axis_alignment = alignment;
        self
    }

    /// Description drawn on the first inner row.
    pub fn set_y_axis_text(&mut self, text: impl Into<String>, alignment: Alignment) -> &mut Self {
        self.y_axis_text = text.into();
        self.y_axis_alignment = alignment;
        self
    }

    /// How points are drawn: one glyph per point or packed Braille dots.
    pub fn set_marker(&mut self, marker: Marker) -> &mut Self {
        self.marker = marker;
        self
    }

    /// Shorthand for `set_marker(Marker::Glyph(glyph))`.
    pub fn set_point_glyph(&mut self, glyph: char) -> &mut Self {
        self.set_marker(Marker::Glyph(glyph))
    }

    /// Current point marker.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Style of tick labels and axis descriptions.
    pub fn set_label_style(&mut self, style: Style) -> &mut Self {
        self.label_style = style;
        self
    }

    /// Style of the rule and tick glyphs.
    pub fn set_axis_style(&mut self, style: Style) -> &mut Self {
        self.axis_style = style;
        self
    }

    /// Title drawn on the top border row; empty means no title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Horizontal placement of the title.
    pub fn set_title_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.title_alignment = alignment;
        self
    }

    /// Draw a border on all four sides. The inner area shrinks by one cell
    /// per side.
    pub fn set_border(&mut self, border: bool) -> &mut Self {
        self.border = border;
        self
    }

    /// Line set used for the border.
    pub fn set_border_type(&mut self, border_type: BorderType) -> &mut Self {
        self.border_type = border_type;
        self
    }

    /// Style of the border and title while the plot is not focused.
    pub fn set_border_style(&mut self, style: Style) -> &mut Self {
        self.border_style = style;
        self
    }

    /// Layered over the border style while the plot has focus.
    pub fn set_focused_border_style(&mut self, style: Style) -> &mut Self {
        self.focused_border_style = style;
        self
    }

    // --- focus & input --------------------------------------------------

    /// Mark the plot focused; the focused border style applies on the next render.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drop focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Classify a mouse event against the area the plot was drawn in.
    ///
    /// Focus is not changed here; the host acts on
    /// [`MouseOutcome::FocusRequested`].
    #[must_use]
    pub fn handle_mouse(&self, event: &MouseEvent, area: Rect) -> MouseOutcome {
        let (x, y) = event.position();
        if !area.contains(x, y) {
            return MouseOutcome::Ignored;
        }
        if y == area.y && event.is_primary_down() {
            MouseOutcome::FocusRequested
        } else {
            MouseOutcome::Consumed
        }
    }

    // --- drawing --------------------------------------------------------

    fn block(&self) -> Block<'_> {
        let mut border_style = self.border_style;
        if self.focused {
            border_style = border_style.patch(self.focused_border_style);
        }
        let mut block = Block::new()
            .borders(if self.border { Borders::ALL } else { Borders::NONE })
            .border_type(self.border_type)
            .border_style(border_style)
            .title_alignment(self.title_alignment);
        if !self.title.is_empty() {
            block = block.title(&self.title);
        }
        block
    }

    fn axis_cell(&self, glyph: char) -> Cell {
        let mut cell = Cell::from_char(glyph);
        self.axis_style.apply_to(&mut cell);
        cell
    }

    fn draw_no_data(&self, inner: Rect, buf: &mut Buffer) {
        let text_width = display_width(&self.no_data_text).min(inner.width as usize) as u16;
        let x = inner.x + (inner.width - text_width) / 2;
        let y = inner.y + inner.height / 2;
        draw_text_span(buf, x, y, &self.no_data_text, self.no_data_style, inner.right());
    }

    fn draw_chart(&self, inner: Rect, series: &DataSeries, extents: &Extents, buf: &mut Buffer) {
        let layout = PlotLayout::compute(inner, extents, &*self.x_label, &*self.y_label);
        cellplot_core::trace!(
            gutter = layout.gutter,
            label_offset = layout.label_offset,
            y_ticks = layout.y_ticks.len(),
            x_ticks = layout.x_ticks.len(),
            plot_w = layout.plot.width,
            plot_h = layout.plot.height,
            "plot layout"
        );

        draw_aligned_text(
            buf,
            layout.y_description,
            &self.y_axis_text,
            self.label_style,
            self.y_axis_alignment,
        );
        draw_aligned_text(
            buf,
            layout.x_description,
            &self.x_axis_text,
            self.label_style,
            self.x_axis_alignment,
        );

        for tick in &layout.y_ticks {
            draw_text_span(
                buf,
                inner.x,
                tick.position,
                &tick.label,
                self.label_style,
                layout.rule_column,
            );
            buf.set(layout.rule_column, tick.position, self.axis_cell(Y_RULE_GLYPH));
        }

        for (i, tick) in layout.x_ticks.iter().enumerate() {
            buf.set(tick.position, layout.x_axis_row, self.axis_cell(X_TICK_GLYPH));
            draw_text_span(
                buf,
                layout.x_label_column(i),
                layout.x_label_row(i),
                &tick.label,
                self.label_style,
                inner.right(),
            );
        }

        let mapper = ScaleMapper::new(*extents, layout.plot);
        self.marker
            .render(series.points(), &mapper, &*self.point_style, buf);
    }
}

impl Widget for Plot {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let _span = cellplot_core::debug_span!(
            "widget_render",
            widget = "Plot",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let area = area.intersection(&buf.bounds());
        if area.is_empty() {
            return;
        }

        let block = self.block();
        block.render(area, buf);
        let inner = block.inner(area);
        if inner.is_empty() {
            return;
        }

        buf.push_scissor(inner);
        match (&self.series, &self.extents) {
            (Some(series), Some(extents)) => self.draw_chart(inner, series, extents, buf),
            _ => self.draw_no_data(inner, buf),
        }
        buf.pop_scissor();
    }
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plot")
            .field("points", &self.series.as_ref().map(DataSeries::len))
            .field("extents", &self.extents)
            .field("marker", &self.marker)
            .field("title", &self.title)
            .field("border", &self.border)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellplot_core::event::{MouseButton, MouseEventKind};
    use cellplot_render::present::{buffer_to_lines, buffer_to_text};

    fn sample() -> Plot {
        let mut plot = Plot::new();
        plot.set_data([[0.0, 10.0], [1.0, 20.0], [2.0, 15.0], [3.0, 5.0]])
            .unwrap();
        plot
    }

    #[test]
    fn new_plot_has_no_data() {
        let plot = Plot::new();
        assert!(plot.data().is_none());
        assert!(plot.extents().is_none());
        assert!(!plot.has_focus());
        assert_eq!(plot.marker(), Marker::Glyph('•'));
        assert_eq!(Plot::braille().marker(), Marker::Braille);
    }

    #[test]
    fn no_data_text_is_centered() {
        let plot = Plot::new();
        let mut buf = Buffer::new(20, 5);
        plot.render(buf.bounds(), &mut buf);
        let lines = buffer_to_lines(&buf);
        assert_eq!(lines[2], "     No Data...");
        assert_eq!(buf.get(5, 2).unwrap().fg, PackedRgba::RED);
    }

    #[test]
    fn custom_no_data_text() {
        let mut plot = Plot::new();
        plot.set_no_data_text("empty");
        let mut buf = Buffer::new(9, 1);
        plot.render(buf.bounds(), &mut buf);
        assert_eq!(buffer_to_text(&buf), "  empty  ");
    }

    #[test]
    fn rejected_data_keeps_previous() {
        let mut plot = sample();
        let before = plot.extents();
        let err = plot.set_data([[1.0, 1.0]]).unwrap_err();
        assert_eq!(err, InvalidSeries::TooFewPoints { got: 1, min: 2 });
        assert_eq!(plot.extents(), before);
        assert_eq!(plot.data().map(DataSeries::len), Some(4));
    }

    #[test]
    fn clear_data_returns_to_no_data() {
        let mut plot = sample();
        plot.clear_data();
        assert!(plot.data().is_none());
        let mut buf = Buffer::new(20, 3);
        plot.render(buf.bounds(), &mut buf);
        assert!(buffer_to_text(&buf).contains("No Data..."));
    }

    #[test]
    fn focus_toggles() {
        let mut plot = Plot::new();
        plot.focus();
        assert!(plot.has_focus());
        plot.blur();
        assert!(!plot.has_focus());
    }

    #[test]
    fn mouse_on_title_row_requests_focus() {
        let plot = Plot::new();
        let area = Rect::new(2, 2, 10, 5);
        let down = |x, y| MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y);

        assert_eq!(plot.handle_mouse(&down(4, 2), area), MouseOutcome::FocusRequested);
        assert_eq!(plot.handle_mouse(&down(4, 3), area), MouseOutcome::Consumed);
        assert_eq!(plot.handle_mouse(&down(0, 0), area), MouseOutcome::Ignored);

        let right = MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 4, 2);
        assert_eq!(plot.handle_mouse(&right, area), MouseOutcome::Consumed);
    }

    #[test]
    fn focused_border_is_bold() {
        use cellplot_render::cell::StyleFlags;

        let mut plot = Plot::new();
        plot.set_border(true);
        let mut buf = Buffer::new(10, 5);
        plot.render(buf.bounds(), &mut buf);
        assert!(!buf.get(0, 0).unwrap().attrs.contains(StyleFlags::BOLD));

        plot.focus();
        let mut buf = Buffer::new(10, 5);
        plot.render(buf.bounds(), &mut buf);
        assert_eq!(buf.get(0, 0).unwrap().symbol(), Some('┌'));
        assert!(buf.get(0, 0).unwrap().attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn title_and_border() {
        let mut plot = Plot::new();
        plot.set_border(true)
            .set_title("CPU")
            .set_title_alignment(Alignment::Left);
        let mut buf = Buffer::new(12, 4);
        plot.render(buf.bounds(), &mut buf);
        assert_eq!(buffer_to_lines(&buf)[0], "┌CPU───────┐");
    }

    #[test]
    fn render_outside_buffer_is_noop() {
        let plot = sample();
        let mut buf = Buffer::new(5, 5);
        plot.render(Rect::new(10, 10, 5, 5), &mut buf);
        assert!(buf.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn debug_shows_point_count() {
        let text = format!("{:?}", sample());
        assert!(text.contains("points: Some(4)"));
    }

    #[test]
    fn plot_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Plot>();
    }
}
