#![forbid(unsafe_code)]

//! cellplot public facade.
//!
//! Re-exports the types most programs need and a [`prelude`] for
//! day-to-day use.

// --- Core re-exports -------------------------------------------------------

pub use cellplot_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use cellplot_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use cellplot_render::buffer::Buffer;
pub use cellplot_render::cell::{Cell, PackedRgba, StyleFlags};
pub use cellplot_render::present::{buffer_to_ansi, buffer_to_text, write_buffer};

// --- Style / widgets -------------------------------------------------------

pub use cellplot_style::{Style, palette};
pub use cellplot_widgets::{Alignment, Block, BorderType, Borders, Widget};

// --- Chart -----------------------------------------------------------------

pub use cellplot_chart::{
    AxisExtents, DataSeries, Extents, InvalidSeries, Marker, MouseOutcome, Plot, Point2D,
    label, style_fn,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for cellplot programs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure while talking to the terminal or reading data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A series the plot refused.
    #[error(transparent)]
    Series(#[from] InvalidSeries),
}

/// Standard result type for cellplot programs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Buffer, Error, Event, Marker, MouseOutcome, Plot, Point2D, Rect, Result,
        Style, Widget, label, palette, style_fn,
    };

    pub use crate::{chart, core, render, style, widgets};
}

pub use cellplot_chart as chart;
pub use cellplot_core as core;
pub use cellplot_render as render;
pub use cellplot_style as style;
pub use cellplot_widgets as widgets;
