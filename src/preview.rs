//! Canvas previews for the terminal and for tooling.
//!
//! Colour terminals get one half-block cell per two rows using 24-bit
//! ANSI colour. Otherwise each pixel prints as a hex digit, with `.` for
//! index 0, which [`Canvas::from_pattern`] reads back unchanged.

use std::fmt::Write;

use serde::Serialize;

use crate::brush::BrushClock;
use crate::canvas::Canvas;
use crate::error::{PaintError, Result};
use crate::selection::Selection;
use crate::types::{Colour, PALETTE_SIZE, TRANSPARENT};

const RESET: &str = "\x1b[0m";
const UPPER_HALF: char = '\u{2580}';

/// Hex digit for one pixel.
fn pixel_char(c: u8) -> char {
    if c == TRANSPARENT {
        '.'
    } else {
        char::from_digit(u32::from(c), 16).unwrap_or('?')
    }
}

/// One row of hex digits per canvas row.
pub fn render_hex(canvas: &Canvas) -> String {
    let mut out = String::with_capacity((canvas.width() + 1) * canvas.height());
    for row in canvas.rows() {
        out.extend(row.iter().map(|&c| pixel_char(c)));
        out.push('\n');
    }
    out
}

/// Rows as hex strings, for JSON.
pub fn hex_rows(canvas: &Canvas) -> Vec<String> {
    canvas
        .rows()
        .map(|row| row.iter().map(|&c| pixel_char(c)).collect())
        .collect()
}

/// Half-block rendering with 24-bit colour.
///
/// The top pixel of each pair is the foreground, the bottom one the
/// background. A trailing odd row leaves the background at the terminal
/// default.
pub fn render_ansi(canvas: &Canvas, palette: &[Colour; PALETTE_SIZE]) -> String {
    let colour = |c: u8| palette[c as usize % PALETTE_SIZE];
    let mut out = String::new();

    for y in (0..canvas.height()).step_by(2) {
        let top = canvas.row(y);
        let bottom = (y + 1 < canvas.height()).then(|| canvas.row(y + 1));

        for x in 0..canvas.width() {
            let fg = colour(top[x]);
            let _ = write!(out, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
            match bottom {
                Some(row) => {
                    let bg = colour(row[x]);
                    let _ = write!(out, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
                }
                None => out.push_str("\x1b[49m"),
            }
            out.push(UPPER_HALF);
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

/// Machine-readable summary of a session.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub width: usize,
    pub height: usize,
    pub frames: u64,
    pub clock: BrushClock,
    pub selection: &'a Selection,
    pub rows: Vec<String>,
}

impl<'a> Snapshot<'a> {
    pub fn new(canvas: &Canvas, frames: u64, clock: BrushClock, selection: &'a Selection) -> Self {
        Self {
            width: canvas.width(),
            height: canvas.height(),
            frames,
            clock,
            selection,
            rows: hex_rows(canvas),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PaintError::Render {
            message: format!("Failed to serialize snapshot: {}", e),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DISPLAY_PALETTE;

    #[test]
    fn test_render_hex() {
        let canvas = Canvas::from_pattern(&["0f1", "a.7"]);
        assert_eq!(render_hex(&canvas), ".f1\na.7\n");
    }

    #[test]
    fn test_hex_reads_back() {
        let canvas = Canvas::from_pattern(&["12.4", "..ef"]);
        let rows = hex_rows(&canvas);
        let borrowed: Vec<&str> = rows.iter().map(String::as_str).collect();
        assert_eq!(Canvas::from_pattern(&borrowed), canvas);
    }

    #[test]
    fn test_render_ansi_pairs_rows() {
        let canvas = Canvas::from_pattern(&["78", "12", "3."]);
        let out = render_ansi(&canvas, &DISPLAY_PALETTE);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches(UPPER_HALF).count(), 2);
        assert!(lines[0].starts_with("\x1b[38;2;238;238;238m\x1b[48;2;43;51;95m"));
        assert!(lines[1].contains("\x1b[49m"));
        assert!(lines.iter().all(|l| l.ends_with(RESET)));
    }

    #[test]
    fn test_snapshot_json() {
        let canvas = Canvas::from_pattern(&["1.", ".2"]);
        let selection = Selection::new(14, 36);
        let snapshot = Snapshot::new(&canvas, 4, BrushClock { angle: 20, step: 2 }, &selection);

        let json = snapshot.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["width"], 2);
        assert_eq!(parsed["frames"], 4);
        assert_eq!(parsed["clock"]["angle"], 20);
        assert_eq!(parsed["selection"]["tool"], "pencil");
        assert_eq!(parsed["rows"][1], ".2");
    }
}
