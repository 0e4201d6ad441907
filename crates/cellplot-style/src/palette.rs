//! Named colours.
//!
//! Values follow the W3C/X11 names that terminal colour pickers use, so a
//! threshold ramp written as "green, yellow, red" looks the same everywhere.

use cellplot_render::cell::PackedRgba;

pub const BLACK: PackedRgba = PackedRgba::rgb(0, 0, 0);
pub const WHITE: PackedRgba = PackedRgba::rgb(255, 255, 255);
pub const GRAY: PackedRgba = PackedRgba::rgb(128, 128, 128);
pub const SILVER: PackedRgba = PackedRgba::rgb(192, 192, 192);
pub const RED: PackedRgba = PackedRgba::rgb(255, 0, 0);
pub const MAROON: PackedRgba = PackedRgba::rgb(128, 0, 0);
pub const GREEN: PackedRgba = PackedRgba::rgb(0, 128, 0);
pub const LIME: PackedRgba = PackedRgba::rgb(0, 255, 0);
pub const DARK_GREEN: PackedRgba = PackedRgba::rgb(0, 100, 0);
pub const GREEN_YELLOW: PackedRgba = PackedRgba::rgb(173, 255, 47);
pub const YELLOW: PackedRgba = PackedRgba::rgb(255, 255, 0);
pub const LIGHT_YELLOW: PackedRgba = PackedRgba::rgb(255, 255, 224);
pub const ORANGE: PackedRgba = PackedRgba::rgb(255, 165, 0);
pub const BLUE: PackedRgba = PackedRgba::rgb(0, 0, 255);
pub const NAVY: PackedRgba = PackedRgba::rgb(0, 0, 128);
pub const TEAL: PackedRgba = PackedRgba::rgb(0, 128, 128);
pub const AQUA: PackedRgba = PackedRgba::rgb(0, 255, 255);
pub const PURPLE: PackedRgba = PackedRgba::rgb(128, 0, 128);
