#![forbid(unsafe_code)]

//! Presentation: turn a [`Buffer`] into plain text or ANSI-styled output.
//!
//! [`buffer_to_text`] is what tests snapshot against. [`write_buffer`] is the
//! full-frame presenter the demo uses: one cursor move per row followed by the
//! row's glyphs with SGR runs.

use std::fmt::Write as _;
use std::io;

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};

const SGR_RESET: &str = "\x1b[0m";

/// Plain text rendering, one line per row, no trailing newline.
///
/// Empty cells become spaces; continuation cells are skipped.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 1) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        push_row_text(&mut out, buf.row_cells(y));
    }
    out
}

/// Like [`buffer_to_text`] but each row has trailing spaces trimmed.
pub fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.height())
        .map(|y| {
            let mut line = String::with_capacity(buf.width() as usize);
            push_row_text(&mut line, buf.row_cells(y));
            line.truncate(line.trim_end_matches(' ').len());
            line
        })
        .collect()
}

fn push_row_text(out: &mut String, row: &[Cell]) {
    for cell in row {
        if cell.is_continuation() {
            continue;
        }
        out.push(glyph(cell));
    }
}

#[inline]
fn glyph(cell: &Cell) -> char {
    if cell.is_empty() {
        ' '
    } else {
        cell.symbol().unwrap_or('?')
    }
}

/// SGR parameter list for a cell, or `None` when it carries only defaults.
fn sgr_params(cell: &Cell) -> Option<String> {
    const FLAG_CODES: [(StyleFlags, &str); 8] = [
        (StyleFlags::BOLD, "1"),
        (StyleFlags::DIM, "2"),
        (StyleFlags::ITALIC, "3"),
        (StyleFlags::UNDERLINE, "4"),
        (StyleFlags::BLINK, "5"),
        (StyleFlags::REVERSE, "7"),
        (StyleFlags::HIDDEN, "8"),
        (StyleFlags::STRIKETHROUGH, "9"),
    ];

    let mut params: Vec<String> = FLAG_CODES
        .iter()
        .filter(|(flag, _)| cell.attrs.contains(*flag))
        .map(|(_, code)| (*code).to_string())
        .collect();

    let fg = cell.fg;
    if fg.a() > 0 && fg != PackedRgba::WHITE {
        params.push(format!("38;2;{};{};{}", fg.r(), fg.g(), fg.b()));
    }
    let bg = cell.bg;
    if bg.a() > 0 {
        params.push(format!("48;2;{};{};{}", bg.r(), bg.g(), bg.b()));
    }

    if params.is_empty() {
        None
    } else {
        Some(params.join(";"))
    }
}

fn push_row_ansi(out: &mut String, row: &[Cell]) {
    let mut prev: Option<(PackedRgba, PackedRgba, StyleFlags)> = None;
    let mut style_active = false;

    for cell in row {
        if cell.is_continuation() {
            continue;
        }

        let key = (cell.fg, cell.bg, cell.attrs);
        if prev != Some(key) {
            if style_active {
                out.push_str(SGR_RESET);
                style_active = false;
            }
            if let Some(params) = sgr_params(cell) {
                let _ = write!(out, "\x1b[{params}m");
                style_active = true;
            }
            prev = Some(key);
        }
        out.push(glyph(cell));
    }

    if style_active {
        out.push_str(SGR_RESET);
    }
}

/// Text with inline SGR sequences; styling resets at the end of every row.
pub fn buffer_to_ansi(buf: &Buffer) -> String {
    let capacity = (buf.width() as usize + 32) * buf.height() as usize;
    let mut out = String::with_capacity(capacity);

    for y in 0..buf.height() {
        if y > 0 {
            out.push('\n');
        }
        push_row_ansi(&mut out, buf.row_cells(y));
    }
    out
}

/// Write a full frame to a terminal, addressing each row with CUP.
///
/// The frame is assembled in memory and handed to the writer in one call,
/// then flushed.
pub fn write_buffer<W: io::Write>(writer: &mut W, buf: &Buffer) -> io::Result<()> {
    let capacity = (buf.width() as usize + 40) * buf.height() as usize;
    let mut frame = String::with_capacity(capacity);

    for y in 0..buf.height() {
        let _ = write!(frame, "\x1b[{};1H", u32::from(y) + 1);
        push_row_ansi(&mut frame, buf.row_cells(y));
    }

    writer.write_all(frame.as_bytes())?;
    writer.flush()
}
