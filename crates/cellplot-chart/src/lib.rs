#![forbid(unsafe_code)]

//! Scatter plots on a character grid.
//!
//! The pipeline, leaves first:
//!
//! - [`extents`]: min/max per axis in one pass
//! - [`scale`]: data space to cells (and 2x4 Braille dots)
//! - [`axis`]: tick placement from label widths
//! - [`label`]: value formatters
//! - [`marker`]: glyph and Braille point renderers
//! - [`plot`]: the [`Plot`] widget that ties it together
//!
//! # Example
//!
//! ```
//! use cellplot_chart::{Plot, label};
//! use cellplot_render::buffer::Buffer;
//! use cellplot_render::present::buffer_to_text;
//! use cellplot_widgets::{Alignment, Widget};
//!
//! let mut plot = Plot::new();
//! plot.set_axis_label_formatters(label::decimal(0), label::percent(0))
//!     .set_y_axis_text("% of CPU", Alignment::Right);
//! plot.set_data([[0.0, 10.0], [1.0, 20.0], [2.0, 15.0], [3.0, 5.0]])?;
//!
//! let mut buf = Buffer::new(40, 20);
//! plot.render(buf.bounds(), &mut buf);
//! assert!(buffer_to_text(&buf).contains("% of CPU"));
//! # Ok::<(), cellplot_chart::InvalidSeries>(())
//! ```

pub mod axis;
pub mod error;
pub mod extents;
pub mod label;
pub mod marker;
pub mod plot;
pub mod scale;
pub mod series;
pub mod style_fn;

pub use axis::{PlotLayout, Tick};
pub use error::InvalidSeries;
pub use extents::{AxisExtents, Extents};
pub use label::LabelFn;
pub use marker::{BrailleRenderer, GlyphRenderer, Marker, PointRenderer};
pub use plot::{MouseOutcome, Plot};
pub use scale::{ScaleMapper, SubCell};
pub use series::{DataSeries, Point2D};
pub use style_fn::StyleFn;
