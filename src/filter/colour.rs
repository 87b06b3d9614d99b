//! Per-pixel index remapping.

use crate::canvas::Canvas;
use crate::types::{ColorIndex, MAX_INDEX, PALETTE_SIZE, TRANSPARENT};

/// Grey equivalent of each palette index.
pub const GRAYSCALE_LUT: [ColorIndex; PALETTE_SIZE] = [
    0, 5, 5, 13, 5, 5, 6, 7, 13, 13, 6, 6, 13, 13, 6, 7,
];

fn remap(canvas: &Canvas, f: impl Fn(ColorIndex) -> ColorIndex) -> Canvas {
    let (width, height) = canvas.size();
    let mut out = Canvas::new(width, height);
    for (y, row) in canvas.rows().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            let mapped = if c == TRANSPARENT { c } else { f(c) };
            out.set_pixel(x as i32, y as i32, mapped);
        }
    }
    out
}

/// Map every opaque index `i` to `15 - i`.
///
/// Index 15 lands on 0 and becomes transparent, so it does not survive a
/// second inversion.
pub fn invert(canvas: &Canvas) -> Canvas {
    remap(canvas, |c| MAX_INDEX - c)
}

/// Collapse the palette onto its greys.
pub fn grayscale(canvas: &Canvas) -> Canvas {
    remap(canvas, |c| GRAYSCALE_LUT[c as usize])
}
