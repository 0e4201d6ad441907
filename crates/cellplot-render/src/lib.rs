#![forbid(unsafe_code)]

//! Render kernel: cells, the buffer surface, and text/ANSI presentation.

pub mod buffer;
pub mod cell;
pub mod present;

mod text_width {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    /// Display width of a single char in terminal cells.
    ///
    /// Control characters count as zero so they never shift a layout.
    #[inline]
    pub fn char_width(ch: char) -> usize {
        if ch.is_ascii() {
            return match ch {
                ' '..='~' => 1,
                _ => 0,
            };
        }
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }

    /// Display width of one grapheme cluster.
    #[inline]
    pub fn grapheme_width(grapheme: &str) -> usize {
        if grapheme.is_ascii() {
            return grapheme.chars().map(char_width).sum();
        }
        UnicodeWidthStr::width(grapheme)
    }

    /// Display width of a string in terminal cells.
    ///
    /// This is the measure every label-length computation uses: a label's
    /// footprint on the grid, not its byte length.
    #[inline]
    pub fn display_width(text: &str) -> usize {
        if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            return text.len();
        }
        text.graphemes(true).map(grapheme_width).sum()
    }
}

pub use text_width::{char_width, display_width, grapheme_width};
