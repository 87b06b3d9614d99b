//! Stroke state and freehand stroking.

use serde::Serialize;

use crate::canvas::DrawOp;
use crate::types::{ColorIndex, Point, Rect};

/// Where the current stroke started and where the pointer was last seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrokeState {
    /// True strictly between a pointer-down on the canvas and the release.
    pub drawing: bool,
    /// Latched at pointer-down; shape tools measure from here.
    pub start: Point,
    /// Pointer position as of the previous frame, None before the first.
    pub previous: Option<Point>,
}

impl StrokeState {
    pub fn begin(&mut self, at: Point) {
        self.drawing = true;
        self.start = at;
    }

    pub fn end(&mut self) {
        self.drawing = false;
    }
}

/// Offsets covering a `size`-pixel square centered the way the pencil
/// centers its dab: `-size/2 .. size - size/2`.
fn square_offsets(size: i32) -> impl Iterator<Item = (i32, i32)> {
    let lo = -(size / 2);
    let hi = size - size / 2;
    (lo..hi).flat_map(move |dy| (lo..hi).map(move |dx| (dx, dy)))
}

/// Offsets inside a disc of radius `half`.
fn disc_offsets(half: i32) -> impl Iterator<Item = (i32, i32)> {
    (-half..=half)
        .flat_map(move |dy| (-half..=half).map(move |dx| (dx, dy)))
        .filter(move |(dx, dy)| dx * dx + dy * dy <= half * half)
}

fn sweep(from: Point, to: Point, offsets: impl Iterator<Item = (i32, i32)>, color: ColorIndex) -> Vec<DrawOp> {
    offsets
        .map(|(dx, dy)| DrawOp::Line {
            from: from.offset(dx, dy),
            to: to.offset(dx, dy),
            color,
        })
        .collect()
}

/// A pencil dab: a `size`-pixel square centered on the cursor.
pub fn pencil_dab(at: Point, size: i32, color: ColorIndex) -> DrawOp {
    DrawOp::RectFilled {
        rect: Rect::new(at.x - size / 2, at.y - size / 2, size, size),
        color,
    }
}

/// Pencil continuation: the dab's square dragged from `from` to `to`.
pub fn pencil_sweep(from: Point, to: Point, size: i32, color: ColorIndex) -> Vec<DrawOp> {
    sweep(from, to, square_offsets(size.max(1)), color)
}

/// A brush dab: a filled disc of radius `size / 2`.
pub fn brush_dab(at: Point, size: i32, color: ColorIndex) -> DrawOp {
    DrawOp::CircleFilled {
        center: at,
        radius: size / 2,
        color,
    }
}

/// Brush continuation: the segment swept by a disc of radius `size / 2`.
pub fn brush_sweep(from: Point, to: Point, size: i32, color: ColorIndex) -> Vec<DrawOp> {
    sweep(from, to, disc_offsets(size / 2), color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    #[test]
    fn test_pencil_dab_size_one() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw(&pencil_dab(Point::new(3, 3), 1, 5));
        assert_eq!(canvas.opaque_count(), 1);
        assert_eq!(canvas.get_pixel(3, 3), Some(5));
    }

    #[test]
    fn test_pencil_dab_is_centered() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw(&pencil_dab(Point::new(4, 4), 3, 2));
        assert_eq!(canvas.opaque_count(), 9);
        assert_eq!(canvas.get_pixel(3, 3), Some(2));
        assert_eq!(canvas.get_pixel(5, 5), Some(2));
    }

    #[test]
    fn test_pencil_sweep_matches_dab_footprint() {
        let mut dab = Canvas::new(12, 12);
        dab.draw(&pencil_dab(Point::new(6, 6), 6, 4));

        let mut swept = Canvas::new(12, 12);
        swept.draw_all(&pencil_sweep(Point::new(6, 6), Point::new(6, 6), 6, 4));

        assert_eq!(swept, dab);
    }

    #[test]
    fn test_pencil_sweep_size_one_is_a_line() {
        let ops = pencil_sweep(Point::new(0, 0), Point::new(5, 0), 1, 3);
        assert_eq!(
            ops,
            vec![DrawOp::Line {
                from: Point::new(0, 0),
                to: Point::new(5, 0),
                color: 3
            }]
        );
    }

    #[test]
    fn test_brush_sweep_covers_thick_band() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_all(&brush_sweep(Point::new(4, 10), Point::new(15, 10), 6, 9));

        // Radius 3 band around y = 10
        for y in 7..=13 {
            assert_eq!(canvas.get_pixel(10, y), Some(9), "y = {y}");
        }
        assert_eq!(canvas.get_pixel(10, 6), Some(0));
        assert_eq!(canvas.get_pixel(10, 14), Some(0));
    }

    #[test]
    fn test_disc_offsets_stay_in_radius() {
        assert_eq!(disc_offsets(0).count(), 1);
        assert_eq!(disc_offsets(1).count(), 5);
        assert!(disc_offsets(4).all(|(x, y)| x * x + y * y <= 16));
    }

    #[test]
    fn test_stroke_begin_end() {
        let mut stroke = StrokeState::default();
        stroke.begin(Point::new(2, 3));
        assert!(stroke.drawing);
        assert_eq!(stroke.start, Point::new(2, 3));
        stroke.end();
        assert!(!stroke.drawing);
        assert_eq!(stroke.start, Point::new(2, 3));
    }
}
