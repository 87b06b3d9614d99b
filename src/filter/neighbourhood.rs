//! Mode-based neighbourhood filters.
//!
//! Palette indices cannot be averaged, so both filters pick the most
//! common opaque index in a window instead.

use super::Histogram;
use crate::canvas::Canvas;
use crate::types::TRANSPARENT;

/// Edge length of a pixelate block.
pub const PIXELATE_BLOCK: usize = 4;

/// Repaint each 4×4 block's opaque pixels with the block's dominant colour.
pub fn pixelate(canvas: &Canvas) -> Canvas {
    let (width, height) = canvas.size();
    let mut out = canvas.clone();

    for by in (0..height).step_by(PIXELATE_BLOCK) {
        for bx in (0..width).step_by(PIXELATE_BLOCK) {
            let ys = by..(by + PIXELATE_BLOCK).min(height);
            let xs = bx..(bx + PIXELATE_BLOCK).min(width);

            let mut histogram = Histogram::new();
            for y in ys.clone() {
                for &c in &canvas.row(y)[xs.clone()] {
                    histogram.add(c);
                }
            }
            let Some(mode) = histogram.mode() else {
                continue;
            };

            for y in ys.clone() {
                for x in xs.clone() {
                    let (x, y) = (x as i32, y as i32);
                    if canvas.get_pixel(x, y) != Some(TRANSPARENT) {
                        out.set_pixel(x, y, mode);
                    }
                }
            }
        }
    }
    out
}

/// Replace each opaque pixel with the mode of its 3×3 window.
pub fn blur(canvas: &Canvas) -> Canvas {
    let (width, height) = canvas.size();
    let mut out = canvas.clone();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if canvas.get_pixel(x, y) == Some(TRANSPARENT) {
                continue;
            }

            let mut histogram = Histogram::new();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if let Some(c) = canvas.get_pixel(x + dx, y + dy) {
                        histogram.add(c);
                    }
                }
            }
            if let Some(mode) = histogram.mode() {
                out.set_pixel(x, y, mode);
            }
        }
    }
    out
}
