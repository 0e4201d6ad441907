#![forbid(unsafe_code)]

//! Live sliding-window demo for cellplot.
//!
//! A sampler thread produces CPU-like load values (or replays a file) and the
//! UI thread draws them with a glyph plot and a Braille plot stacked
//! vertically.

pub mod app;
pub mod cli;
pub mod data;
