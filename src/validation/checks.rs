//! Validation checks for session scripts.
//!
//! Each check takes the script plus the canvas size it will run against and
//! returns a `ValidationResult`. Nothing here is fatal to playback: the
//! engine clips and wraps everything. Errors mark steps that cannot do
//! what they say.

use crate::assets::Assets;
use crate::brush::BrushKind;
use crate::filter::FilterKind;
use crate::script::{Script, Step};
use crate::selection::{Cycle, BRUSH_SIZES};
use crate::types::{LAYER_COUNT, PALETTE_SIZE};

use super::warning::{Diagnostic, ValidationResult};

/// Canvas dimensions a script is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// A script with no steps does nothing.
pub fn check_empty(script: &Script) -> ValidationResult {
    let mut result = ValidationResult::new();
    if script.steps.is_empty() {
        result.push(
            Diagnostic::warning("pxpaint::script::empty", "Script has no steps")
                .with_help("Add a `steps:` list"),
        );
    }
    result
}

/// Strokes need at least one point.
pub fn check_empty_strokes(script: &Script) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, step) in script.steps.iter().enumerate() {
        if let Step::Stroke(points) = step {
            if points.is_empty() {
                result.push(
                    Diagnostic::error("pxpaint::script::empty-stroke", "Stroke has no points")
                        .with_help("Give at least one [x, y] point, or use `tap`")
                        .at_step(i),
                );
            }
        }
    }
    result
}

/// Gestures that press off the canvas never start a stroke.
pub fn check_press_position(script: &Script, bounds: Bounds) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, step) in script.steps.iter().enumerate() {
        let press = match step {
            Step::Tap(p) => Some(*p),
            Step::Stroke(points) => points.first().copied(),
            Step::Frame(raw) if raw.pressed => Some(raw.at),
            _ => None,
        };
        let Some(p) = press else { continue };
        if !bounds.contains(p.x, p.y) {
            result.push(
                Diagnostic::warning(
                    "pxpaint::script::off-canvas",
                    format!(
                        "{} presses at ({}, {}), outside the {}x{} canvas; nothing is drawn",
                        step.kind(),
                        p.x,
                        p.y,
                        bounds.width,
                        bounds.height
                    ),
                )
                .at_step(i),
            );
        }
    }
    result
}

/// Colours and absolute table indices that will wrap.
pub fn check_wrapping_indices(script: &Script, assets: &Assets) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, step) in script.steps.iter().enumerate() {
        let (table, index, count) = match step {
            Step::Color(c) => {
                if !(0..PALETTE_SIZE as i64).contains(c) {
                    result.push(
                        Diagnostic::warning(
                            "pxpaint::script::color-wrap",
                            format!("Colour {} is outside 0..{} and will wrap", c, PALETTE_SIZE),
                        )
                        .at_step(i),
                    );
                }
                continue;
            }
            Step::Palette(Cycle::To(n)) => ("palette", *n, LAYER_COUNT),
            Step::Size(Cycle::To(n)) => ("size", *n, BRUSH_SIZES.len()),
            Step::Stamp(Cycle::To(n)) => ("stamp", *n, assets.stamps.len()),
            Step::Brush(Cycle::To(n)) => ("brush", *n, BrushKind::ALL.len()),
            Step::Filter(Cycle::To(n)) => ("filter", *n, FilterKind::ALL.len()),
            Step::Glyph(Cycle::To(n)) => ("glyph", *n, assets.glyphs.len()),
            _ => continue,
        };

        if index >= count {
            result.push(
                Diagnostic::warning(
                    "pxpaint::script::index-wrap",
                    format!(
                        "{} index {} is past the last entry ({}) and will wrap",
                        table,
                        index,
                        count.saturating_sub(1)
                    ),
                )
                .at_step(i),
            );
        }
    }
    result
}

/// Raw frames whose button flags contradict each other.
pub fn check_raw_frames(script: &Script) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, step) in script.steps.iter().enumerate() {
        let Step::Frame(raw) = step else { continue };
        if raw.pressed && !raw.held {
            result.push(
                Diagnostic::warning(
                    "pxpaint::script::frame-state",
                    "Frame is pressed but not held",
                )
                .with_help("A button pressed this frame is also held this frame")
                .at_step(i),
            );
        }
        if raw.held && raw.released {
            result.push(
                Diagnostic::error(
                    "pxpaint::script::frame-state",
                    "Frame is both held and released",
                )
                .at_step(i),
            );
        }
    }
    result
}

/// `wait: 0` is a no-op.
pub fn check_waits(script: &Script) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (i, step) in script.steps.iter().enumerate() {
        if let Step::Wait(0) = step {
            result.push(
                Diagnostic::warning("pxpaint::script::zero-wait", "Wait of 0 frames does nothing")
                    .at_step(i),
            );
        }
    }
    result
}
