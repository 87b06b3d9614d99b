//! Whole-canvas filters.
//!
//! Every filter is a pure function from one canvas to a new canvas of the
//! same size. Index 0 is treated as transparent: colour filters leave it
//! alone and the neighbourhood filters neither change it nor let it vote.

mod colour;
mod geometric;
mod neighbourhood;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::types::{ColorIndex, PALETTE_SIZE, TRANSPARENT};

pub use colour::{grayscale, invert, GRAYSCALE_LUT};
pub use geometric::{flip_x, flip_y, rotate_90, wave};
pub use neighbourhood::{blur, pixelate, PIXELATE_BLOCK};

/// The filter kinds, in toolbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    #[default]
    Invert,
    Grayscale,
    FlipX,
    FlipY,
    Rotate90,
    Wave,
    Pixelate,
    Blur,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Invert,
        FilterKind::Grayscale,
        FilterKind::FlipX,
        FilterKind::FlipY,
        FilterKind::Rotate90,
        FilterKind::Wave,
        FilterKind::Pixelate,
        FilterKind::Blur,
    ];

    /// Position in [`FilterKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a table position, wrapping out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Invert => "invert",
            FilterKind::Grayscale => "grayscale",
            FilterKind::FlipX => "flip-x",
            FilterKind::FlipY => "flip-y",
            FilterKind::Rotate90 => "rotate-90",
            FilterKind::Wave => "wave",
            FilterKind::Pixelate => "pixelate",
            FilterKind::Blur => "blur",
        }
    }

    /// Run this filter, returning the transformed canvas.
    pub fn apply(self, canvas: &Canvas) -> Canvas {
        match self {
            FilterKind::Invert => invert(canvas),
            FilterKind::Grayscale => grayscale(canvas),
            FilterKind::FlipX => flip_x(canvas),
            FilterKind::FlipY => flip_y(canvas),
            FilterKind::Rotate90 => rotate_90(canvas),
            FilterKind::Wave => wave(canvas),
            FilterKind::Pixelate => pixelate(canvas),
            FilterKind::Blur => blur(canvas),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-index counts over a neighbourhood.
///
/// The palette is tiny, so a fixed array beats any map.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    counts: [u32; PALETTE_SIZE],
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pixel. Transparent pixels never vote.
    pub fn add(&mut self, color: ColorIndex) {
        if color != TRANSPARENT {
            self.counts[color as usize % PALETTE_SIZE] += 1;
        }
    }

    /// The most frequent index; ties go to the lowest index.
    pub fn mode(&self) -> Option<ColorIndex> {
        let mut best: Option<(usize, u32)> = None;
        for (index, &count) in self.counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index as ColorIndex)
    }
}
