//! The indexed-colour raster canvas.
//!
//! A canvas is a fixed-size grid of palette indices. Every drawing
//! operation is total: pixels that fall outside the grid are clipped one by
//! one, and colour values are wrapped into the palette range before they
//! are stored.

mod ops;
mod shapes;

pub use ops::DrawOp;

use crate::types::{wrap_index, ColorIndex, Point, Rect, TRANSPARENT};

/// An indexed-colour pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,

    /// Row-major pixel indices: pixels[y * width + x].
    pixels: Vec<ColorIndex>,
}

impl Canvas {
    /// Create a canvas cleared to the transparent index.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: ColorIndex) -> Self {
        Self {
            width,
            height,
            pixels: vec![wrap_index(color.into()); width * height],
        }
    }

    /// Build a canvas from text rows.
    ///
    /// Each character is a hex digit giving the palette index; `.` and
    /// space mean transparent. Short rows are padded with transparent.
    pub fn from_pattern(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut canvas = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if let Some(d) = c.to_digit(16) {
                    canvas.pixels[y * width + x] = d as ColorIndex;
                }
            }
        }
        canvas
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The full canvas area as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Check whether a coordinate lies on the canvas.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Read a pixel. Returns None off-canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel. Off-canvas writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = wrap_index(color.into());
        }
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: ColorIndex) {
        self.pixels.fill(wrap_index(color.into()));
    }

    /// Get a reference to the flat pixel buffer.
    pub fn pixels(&self) -> &[ColorIndex] {
        &self.pixels
    }

    /// Get one row of pixels.
    pub fn row(&self, y: usize) -> &[ColorIndex] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> + '_ {
        // chunks_exact rejects a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Count pixels that are not transparent.
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != TRANSPARENT).count()
    }

    /// Copy a region of `source` onto this canvas with its top-left at `dst`.
    ///
    /// Source pixels equal to `transparent` are skipped, leaving the
    /// destination untouched. Parts of `src` outside the source, and parts
    /// of the destination outside this canvas, are clipped.
    pub fn blit(&mut self, dst: Point, source: &Canvas, src: Rect, transparent: ColorIndex) {
        self.copy_region(dst, source, src, transparent, |c| c);
    }

    /// Like [`Canvas::blit`], but every copied pixel is drawn in `color`.
    ///
    /// Used for glyphs, whose source pixels only mark coverage.
    pub fn stencil(
        &mut self,
        dst: Point,
        source: &Canvas,
        src: Rect,
        transparent: ColorIndex,
        color: ColorIndex,
    ) {
        self.copy_region(dst, source, src, transparent, |_| color);
    }

    fn copy_region(
        &mut self,
        dst: Point,
        source: &Canvas,
        src: Rect,
        transparent: ColorIndex,
        paint: impl Fn(ColorIndex) -> ColorIndex,
    ) {
        for sy in 0..src.h.max(0) {
            for sx in 0..src.w.max(0) {
                let Some(c) = source.get_pixel(src.x.saturating_add(sx), src.y.saturating_add(sy))
                else {
                    continue;
                };
                if c == transparent {
                    continue;
                }
                self.set_pixel(dst.x.saturating_add(sx), dst.y.saturating_add(sy), paint(c));
            }
        }
    }
}
