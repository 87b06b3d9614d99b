//! Filters that move pixels without changing their index.

use crate::canvas::Canvas;
use crate::types::ColorIndex;

/// Vertical displacement of the wave filter, in pixels.
const WAVE_AMPLITUDE: f64 = 4.0;

/// Wave cycles per column.
const WAVE_FREQUENCY: f64 = 0.05;

/// Build a same-size canvas where pixel (x, y) is read from `source(x, y)`.
fn resample(canvas: &Canvas, source: impl Fn(i32, i32) -> (i32, i32)) -> Canvas {
    let (width, height) = canvas.size();
    let mut out = Canvas::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (sx, sy) = source(x, y);
            if let Some(c) = canvas.get_pixel(sx, sy) {
                out.set_pixel(x, y, c);
            }
        }
    }
    out
}

/// Mirror left to right.
pub fn flip_x(canvas: &Canvas) -> Canvas {
    let w = canvas.width() as i32;
    resample(canvas, |x, y| (w - 1 - x, y))
}

/// Mirror top to bottom.
pub fn flip_y(canvas: &Canvas) -> Canvas {
    let h = canvas.height() as i32;
    resample(canvas, |x, y| (x, h - 1 - y))
}

/// Rotate a quarter turn clockwise.
///
/// The rotated image is H wide and W tall. It is centered on a cleared
/// W×H canvas; whatever falls outside is lost.
pub fn rotate_90(canvas: &Canvas) -> Canvas {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    // rotated(rx, ry) = source(ry, h - 1 - rx), rx in 0..h, ry in 0..w
    let mut rotated: Vec<ColorIndex> = Vec::with_capacity(canvas.pixels().len());
    for ry in 0..w {
        for rx in 0..h {
            rotated.push(canvas.get_pixel(ry, h - 1 - rx).unwrap_or_default());
        }
    }

    let ox = (w - h) / 2;
    let oy = (h - w) / 2;

    let mut out = Canvas::new(w as usize, h as usize);
    for ry in 0..w {
        for rx in 0..h {
            let c = rotated[(ry * h + rx) as usize];
            out.set_pixel(rx + ox, ry + oy, c);
        }
    }
    out
}

/// Shift each column vertically along a sine wave, wrapping rows.
pub fn wave(canvas: &Canvas) -> Canvas {
    let h = canvas.height() as i32;
    if h == 0 {
        return canvas.clone();
    }
    resample(canvas, |x, y| (x, (y + wave_offset(x)).rem_euclid(h)))
}

fn wave_offset(x: i32) -> i32 {
    let degrees = f64::from(x) * WAVE_FREQUENCY * 360.0;
    (WAVE_AMPLITUDE * degrees.to_radians().sin()).round() as i32
}
