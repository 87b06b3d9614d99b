//! Image tables that stamps and glyphs are blitted from.
//!
//! A sheet is one canvas holding every sprite side by side, plus the
//! source rectangle of each sprite. The built-in sheets are assembled
//! from text patterns at startup, so no resource files are involved.

mod glyphs;
mod stamps;

pub use glyphs::{BuiltinGlyphs, GLYPH_INK};
pub use stamps::BuiltinStamps;

use crate::canvas::Canvas;
use crate::types::{Point, Rect};

/// A named source rectangle on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub rect: Rect,
}

impl Frame {
    /// Destination for blitting this frame centered on `at`.
    pub fn centered_at(&self, at: Point) -> Point {
        at.offset(-(self.rect.w / 2), -(self.rect.h / 2))
    }
}

/// A packed image table.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: Canvas,
    frames: Vec<Frame>,
}

impl SpriteSheet {
    /// Pack sprites left to right into fixed-width cells.
    ///
    /// Every sprite starts at the left edge of its own `cell`-wide slot, so
    /// sprite `i` lives at `x = i * cell` regardless of the sizes around it.
    pub fn pack(sprites: Vec<(String, Canvas)>, cell: usize) -> Self {
        let cell = sprites
            .iter()
            .map(|(_, c)| c.width())
            .max()
            .unwrap_or(0)
            .max(cell);
        let height = sprites.iter().map(|(_, c)| c.height()).max().unwrap_or(0);

        let mut image = Canvas::new(cell * sprites.len(), height);
        let mut frames = Vec::with_capacity(sprites.len());

        for (i, (name, sprite)) in sprites.into_iter().enumerate() {
            let origin = Point::new((i * cell) as i32, 0);
            image.blit(origin, &sprite, sprite.bounds(), crate::types::TRANSPARENT);
            frames.push(Frame {
                name,
                rect: Rect::new(origin.x, 0, sprite.width() as i32, sprite.height() as i32),
            });
        }

        Self { image, frames }
    }

    /// The packed image.
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    /// Number of frames on the sheet.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get a frame by index, wrapping out-of-range values.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(index % self.frames.len())
    }

    /// Iterate over frame names in sheet order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.name.as_str())
    }
}

/// The sheets a paint session draws from.
#[derive(Debug, Clone)]
pub struct Assets {
    pub stamps: SpriteSheet,
    pub glyphs: SpriteSheet,
}

impl Assets {
    /// The built-in stamp and glyph sheets.
    pub fn builtin() -> Self {
        Self {
            stamps: BuiltinStamps::sheet(),
            glyphs: BuiltinGlyphs::sheet(),
        }
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::builtin()
    }
}
