//! The eight pattern generators.
//!
//! Colours come from the active palette layer. Patterns that cycle colour
//! index the layer with the clock's step, so repeated applications rotate
//! through the swatches.

use std::f64::consts::TAU;

use rand::Rng;

use super::BrushInput;
use crate::canvas::DrawOp;
use crate::types::{ColorIndex, Point, Rect, LAYER_SIZE};

/// Position at `radius` from `center` along `degrees`.
fn polar(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point::from_f64(
        f64::from(center.x) + radius * rad.cos(),
        f64::from(center.y) + radius * rad.sin(),
    )
}

fn random_swatch<R: Rng + ?Sized>(input: &BrushInput, rng: &mut R) -> ColorIndex {
    input.layer.colour(rng.gen_range(0..LAYER_SIZE as u64))
}

/// Join consecutive points with lines; `closed` also joins last to first.
fn polyline(points: &[Point], closed: bool, color: ColorIndex) -> Vec<DrawOp> {
    let mut ops: Vec<DrawOp> = points
        .windows(2)
        .map(|w| DrawOp::Line {
            from: w[0],
            to: w[1],
            color,
        })
        .collect();

    if closed && points.len() > 2 {
        ops.push(DrawOp::Line {
            from: points[points.len() - 1],
            to: points[0],
            color,
        });
    }
    ops
}

/// 3 to 5 circles scattered around the cursor, filled or outlined at random.
pub fn random_circles<R: Rng + ?Sized>(input: &BrushInput, rng: &mut R) -> Vec<DrawOp> {
    let count = rng.gen_range(3..=5);
    (0..count)
        .map(|_| {
            let center = input
                .cursor
                .offset(rng.gen_range(-10..=10), rng.gen_range(-10..=10));
            let radius = rng.gen_range(1..=8);
            let color = random_swatch(input, rng);
            if rng.gen_bool(0.5) {
                DrawOp::CircleFilled {
                    center,
                    radius,
                    color,
                }
            } else {
                DrawOp::CircleOutline {
                    center,
                    radius,
                    color,
                }
            }
        })
        .collect()
}

/// Eight spokes of length 12 turning with the clock angle.
pub fn rotating_lines(input: &BrushInput) -> Vec<DrawOp> {
    const SPOKES: u64 = 8;
    const LENGTH: f64 = 12.0;

    (0..SPOKES)
        .map(|i| {
            let degrees = f64::from(input.clock.angle) + i as f64 * 360.0 / SPOKES as f64;
            DrawOp::Line {
                from: input.cursor,
                to: polar(input.cursor, LENGTH, degrees),
                color: input.cycled(i),
            }
        })
        .collect()
}

/// A jittered V from the previous position through the midpoint to the cursor.
pub fn loops<R: Rng + ?Sized>(input: &BrushInput, rng: &mut R) -> Vec<DrawOp> {
    let Some(previous) = input.previous else {
        return Vec::new();
    };

    let bend = previous
        .midpoint(input.cursor)
        .offset(rng.gen_range(-5..=5), rng.gen_range(-5..=5));
    let color = input.cycled(0);

    polyline(&[previous, bend, input.cursor], false, color)
}

/// A three-turn spiral of 20 points growing out from the cursor.
pub fn spirals(input: &BrushInput) -> Vec<DrawOp> {
    const POINTS: usize = 20;
    const TURNS: f64 = 3.0;
    const RADIUS_STEP: f64 = 0.3;

    let points: Vec<Point> = (0..POINTS)
        .map(|i| {
            let degrees = f64::from(input.clock.angle) + i as f64 * TURNS * 360.0 / POINTS as f64;
            polar(input.cursor, i as f64 * RADIUS_STEP, degrees)
        })
        .collect();

    polyline(&points, false, input.cycled(0))
}

/// Nested square outlines from 16 down to 2 pixels.
pub fn squares(input: &BrushInput) -> Vec<DrawOp> {
    const MAX_SIZE: i32 = 16;
    const MIN_SIZE: i32 = 2;

    (0..MAX_SIZE)
        .step_by(2)
        .map(|i| (i, MAX_SIZE - i))
        .take_while(|&(_, size)| size >= MIN_SIZE)
        .map(|(i, size)| {
            let corner = input.cursor.offset(-(size / 2), -(size / 2));
            DrawOp::RectOutline {
                rect: Rect::new(corner.x, corner.y, size, size),
                color: input.cycled(i as u64),
            }
        })
        .collect()
}

/// A five-pointed star outline rotated by the clock angle.
pub fn stars(input: &BrushInput) -> Vec<DrawOp> {
    const TIPS: usize = 5;
    const OUTER: f64 = 8.0;
    const INNER: f64 = 3.0;

    let vertices = TIPS * 2;
    let points: Vec<Point> = (0..vertices)
        .map(|i| {
            let degrees = f64::from(input.clock.angle) + i as f64 * 360.0 / vertices as f64;
            let radius = if i % 2 == 0 { OUTER } else { INNER };
            polar(input.cursor, radius, degrees)
        })
        .collect();

    polyline(&points, true, input.cycled(0))
}

/// Twenty tiny squares in random swatches around the cursor.
pub fn confetti<R: Rng + ?Sized>(input: &BrushInput, rng: &mut R) -> Vec<DrawOp> {
    (0..20)
        .map(|_| {
            let at = input
                .cursor
                .offset(rng.gen_range(-15..=15), rng.gen_range(-15..=15));
            let size = rng.gen_range(1..=3);
            DrawOp::RectFilled {
                rect: Rect::new(at.x, at.y, size, size),
                color: random_swatch(input, rng),
            }
        })
        .collect()
}

/// A ribbon that wiggles across the path from the previous position.
///
/// Needs a previous position at least one pixel away.
pub fn waves(input: &BrushInput) -> Vec<DrawOp> {
    const SEGMENTS: usize = 10;

    let Some(previous) = input.previous else {
        return Vec::new();
    };
    let dist = previous.distance(input.cursor);
    if dist < 1.0 {
        return Vec::new();
    }

    let (dx, dy) = previous.delta(input.cursor);
    let (ux, uy) = (dx as f64 / dist, dy as f64 / dist);
    let (px, py) = (-uy, ux);

    let step = input.clock.step as f64;
    let amplitude = 5.0 * (step * 0.1).sin();

    let point_at = |t: f64| {
        let wave = amplitude * (t * TAU + step * 0.2).sin();
        Point::from_f64(
            f64::from(previous.x) + ux * dist * t + px * wave,
            f64::from(previous.y) + uy * dist * t + py * wave,
        )
    };

    (0..SEGMENTS)
        .map(|i| DrawOp::Line {
            from: point_at(i as f64 / SEGMENTS as f64),
            to: point_at((i + 1) as f64 / SEGMENTS as f64),
            color: input.cycled(i as u64),
        })
        .collect()
}
