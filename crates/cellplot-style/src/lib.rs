#![forbid(unsafe_code)]

//! Style values for cellplot.
//!
//! A [`Style`] is a sparse set of overrides: each field is either set or left
//! alone. Applying a style to a [`Cell`] only touches the fields that are set,
//! so styles layer cleanly (block background, then label colour, then point
//! colour).
//!
//! # Example
//! ```
//! use cellplot_style::{Style, palette};
//! use cellplot_render::cell::Cell;
//!
//! let mut cell = Cell::from_char('x');
//! Style::new().fg(palette::RED).bold().apply_to(&mut cell);
//! assert_eq!(cell.fg, palette::RED);
//! ```

pub mod palette;

use cellplot_render::cell::{Cell, PackedRgba, StyleFlags};

/// Sparse style: unset fields leave the target cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground colour override.
    pub fg: Option<PackedRgba>,
    /// Background colour override.
    pub bg: Option<PackedRgba>,
    /// Attribute flags to add.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground colour.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background colour.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Replace the attribute flags.
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    fn add_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flag);
        self
    }

    /// Add bold.
    #[inline]
    #[must_use]
    pub fn bold(self) -> Self {
        self.add_flag(StyleFlags::BOLD)
    }

    /// Add dim.
    #[inline]
    #[must_use]
    pub fn dim(self) -> Self {
        self.add_flag(StyleFlags::DIM)
    }

    /// Add italic.
    #[inline]
    #[must_use]
    pub fn italic(self) -> Self {
        self.add_flag(StyleFlags::ITALIC)
    }

    /// Add underline.
    #[inline]
    #[must_use]
    pub fn underline(self) -> Self {
        self.add_flag(StyleFlags::UNDERLINE)
    }

    /// Add reverse video.
    #[inline]
    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_flag(StyleFlags::REVERSE)
    }

    /// Layer `other` on top of `self`: fields set in `other` win, attribute
    /// flags are unioned.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        let attrs = match (self.attrs, other.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => b.or(a),
        };
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs,
        }
    }

    /// True when no field is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Write the set fields into `cell`. Content is never touched.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs |= attrs;
        }
    }
}
