//! Palette layers: fixed pages of swatches presented to the user.
//!
//! Each layer holds 14 colour indices, leaving room for the two
//! page-navigation buttons on a 16-slot toolbar row.

use super::colour::ColorIndex;

/// Number of swatches on one palette layer.
pub const LAYER_SIZE: usize = 14;

/// The built-in palette layers.
pub const PALETTE_LAYERS: [[ColorIndex; LAYER_SIZE]; 3] = [
    // Base colours, minus the last two
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
    // The remaining two plus a rainbow ordering
    [14, 15, 8, 9, 10, 11, 12, 3, 1, 2, 4, 5, 6, 7],
    // Greys
    [0, 0, 5, 5, 6, 6, 7, 7, 7, 6, 6, 5, 5, 0],
];

/// Number of palette layers.
pub const LAYER_COUNT: usize = PALETTE_LAYERS.len();

/// A borrowed view of one palette layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayer {
    index: usize,
    colours: &'static [ColorIndex; LAYER_SIZE],
}

impl PaletteLayer {
    /// Get a layer by index, wrapping out-of-range values.
    pub fn get(index: usize) -> Self {
        let index = index % LAYER_COUNT;
        Self {
            index,
            colours: &PALETTE_LAYERS[index],
        }
    }

    /// Position of this layer in the layer table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Colour at a swatch slot, wrapping the slot into the layer.
    ///
    /// Generators index with `(i + step) % LAYER_SIZE`; taking the modulo
    /// here means a raw counter can be passed straight through.
    pub fn colour(&self, slot: u64) -> ColorIndex {
        self.colours[(slot % LAYER_SIZE as u64) as usize]
    }

    /// All swatches on this layer.
    pub fn colours(&self) -> &'static [ColorIndex] {
        self.colours
    }
}
