//! Core domain types for pxpaint.
//!
//! - `ColorIndex` - a palette index, 0 is transparent
//! - `Colour` - RGB display colours for the 16 indices
//! - `Point` / `Rect` - integer canvas geometry
//! - `PaletteLayer` - the swatch rows shown in the picker

mod colour;
mod geometry;
mod palette;

pub use colour::{
    wrap_index, ColorIndex, Colour, DISPLAY_PALETTE, MAX_INDEX, PALETTE_SIZE, TRANSPARENT,
};
pub use geometry::{Point, Rect};
pub use palette::{PaletteLayer, LAYER_COUNT, LAYER_SIZE, PALETTE_LAYERS};
