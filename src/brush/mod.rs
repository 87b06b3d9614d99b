//! Procedural ("algorithmic") brushes.
//!
//! Each brush kind turns a cursor position, the previous pointer position
//! and a shared animation clock into a batch of draw ops. The clock is
//! advanced after every application, whichever kind ran, so switching
//! kinds mid-stroke keeps the rotation and colour cycle going.

mod generators;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, DrawOp};
use crate::types::{ColorIndex, PaletteLayer, Point};

/// The procedural brush kinds, in toolbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrushKind {
    #[default]
    RandomCircles,
    RotatingLines,
    Loops,
    Spirals,
    Squares,
    Stars,
    Confetti,
    Waves,
}

impl BrushKind {
    pub const ALL: [BrushKind; 8] = [
        BrushKind::RandomCircles,
        BrushKind::RotatingLines,
        BrushKind::Loops,
        BrushKind::Spirals,
        BrushKind::Squares,
        BrushKind::Stars,
        BrushKind::Confetti,
        BrushKind::Waves,
    ];

    /// Position in [`BrushKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a table position, wrapping out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            BrushKind::RandomCircles => "random-circles",
            BrushKind::RotatingLines => "rotating-lines",
            BrushKind::Loops => "loops",
            BrushKind::Spirals => "spirals",
            BrushKind::Squares => "squares",
            BrushKind::Stars => "stars",
            BrushKind::Confetti => "confetti",
            BrushKind::Waves => "waves",
        }
    }
}

impl fmt::Display for BrushKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Animation state shared by every procedural brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BrushClock {
    /// Rotation in whole degrees, always in `0..360`.
    pub angle: u16,
    /// Number of applications so far.
    pub step: u64,
}

impl BrushClock {
    /// Degrees added to the angle per application.
    pub const ANGLE_STEP: u16 = 10;

    /// The clock after one more application.
    pub fn advance(self) -> Self {
        Self {
            angle: (self.angle + Self::ANGLE_STEP) % 360,
            step: self.step.wrapping_add(1),
        }
    }
}

/// Everything a generator reads.
#[derive(Debug, Clone, Copy)]
pub struct BrushInput {
    pub cursor: Point,
    /// Last known pointer position, or None before the first frame.
    pub previous: Option<Point>,
    pub clock: BrushClock,
    pub layer: PaletteLayer,
}

impl BrushInput {
    /// Swatch `i` places along the layer from the clock's current step.
    pub fn cycled(&self, i: u64) -> ColorIndex {
        self.layer.colour(i.wrapping_add(self.clock.step))
    }
}

/// Produce the draw batch for one application of `kind`.
///
/// Does not touch the clock; see [`apply`].
pub fn generate<R: Rng + ?Sized>(kind: BrushKind, input: &BrushInput, rng: &mut R) -> Vec<DrawOp> {
    match kind {
        BrushKind::RandomCircles => generators::random_circles(input, rng),
        BrushKind::RotatingLines => generators::rotating_lines(input),
        BrushKind::Loops => generators::loops(input, rng),
        BrushKind::Spirals => generators::spirals(input),
        BrushKind::Squares => generators::squares(input),
        BrushKind::Stars => generators::stars(input),
        BrushKind::Confetti => generators::confetti(input, rng),
        BrushKind::Waves => generators::waves(input),
    }
}

/// Apply a brush to the canvas and return the advanced clock.
pub fn apply<R: Rng + ?Sized>(
    kind: BrushKind,
    canvas: &mut Canvas,
    input: &BrushInput,
    rng: &mut R,
) -> BrushClock {
    let ops = generate(kind, input, rng);
    canvas.draw_all(&ops);
    input.clock.advance()
}
