//! Rasterized primitives: lines, rectangles and circles.

use super::Canvas;
use crate::types::{ColorIndex, Rect};

/// Lines are walked only this far outside the canvas; longer segments are
/// cut back along their own slope first.
const LINE_MARGIN: i64 = 64;

/// Circles larger than this are rasterized row by row over the canvas
/// instead of walking the whole octant.
const WALK_RADIUS_LIMIT: i64 = 4096;

impl Canvas {
    /// Draw a line with Bresenham's algorithm, including both endpoints.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorIndex) {
        // i64 keeps the error term from overflowing on far off-canvas endpoints
        let from = (i64::from(x0), i64::from(y0));
        let to = (i64::from(x1), i64::from(y1));
        let Some(((mut x, mut y), (x1, y1))) = self.cut_to_margin(from, to) else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill an axis-aligned rectangle. Empty sizes draw nothing.
    pub fn rect_filled(&mut self, x: i32, y: i32, w: i32, h: i32, color: ColorIndex) {
        let Some((x0, y0, x1, y1)) = self.clip(Rect::new(x, y, w, h)) else {
            return;
        };
        for row in y0..y1 {
            self.hspan(x0, x1, row, color);
        }
    }

    /// Draw the one-pixel border of an axis-aligned rectangle.
    pub fn rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: ColorIndex) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.rect_filled(x, y, w, 1, color);
        self.rect_filled(x, bottom, w, 1, color);
        self.rect_filled(x, y, 1, h, color);
        self.rect_filled(right, y, 1, h, color);
    }

    /// Draw a filled circle. Radius 0 is a single pixel; negative draws nothing.
    pub fn circle_filled(&mut self, cx: i32, cy: i32, r: i32, color: ColorIndex) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        if !self.circle_touches(cx, cy, r) {
            return;
        }

        if r > WALK_RADIUS_LIMIT {
            for y in 0..self.height as i64 {
                if let Some(half) = half_chord(r, y - cy) {
                    self.hline(cx - half, cx + half, y, color);
                }
            }
            return;
        }

        for_each_octant_point(r, |x, y| {
            self.hline(cx - x, cx + x, cy + y, color);
            self.hline(cx - x, cx + x, cy - y, color);
            self.hline(cx - y, cx + y, cy + x, color);
            self.hline(cx - y, cx + y, cy - x, color);
        });
    }

    /// Draw a circle outline. Radius 0 is a single pixel; negative draws nothing.
    pub fn circle_outline(&mut self, cx: i32, cy: i32, r: i32, color: ColorIndex) {
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        if !self.circle_touches(cx, cy, r) {
            return;
        }

        if r > WALK_RADIUS_LIMIT {
            // Both chord ends per row and per column, so steep arcs keep no gaps
            for y in 0..self.height as i64 {
                if let Some(half) = half_chord(r, y - cy) {
                    self.plot(cx - half, y, color);
                    self.plot(cx + half, y, color);
                }
            }
            for x in 0..self.width as i64 {
                if let Some(half) = half_chord(r, x - cx) {
                    self.plot(x, cy - half, color);
                    self.plot(x, cy + half, color);
                }
            }
            return;
        }

        for_each_octant_point(r, |x, y| {
            for (px, py) in [
                (x, y),
                (-x, y),
                (x, -y),
                (-x, -y),
                (y, x),
                (-y, x),
                (y, -x),
                (-y, -x),
            ] {
                self.plot(cx + px, cy + py, color);
            }
        });
    }

    /// Inclusive horizontal run between two x positions.
    fn hline(&mut self, xa: i64, xb: i64, y: i64, color: ColorIndex) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let x0 = xa.min(xb).max(0);
        let x1 = xa.max(xb).min(self.width as i64 - 1);
        if x0 <= x1 {
            self.hspan(x0 as usize, x1 as usize + 1, y as usize, color);
        }
    }

    /// Half-open run on a row already known to be on the canvas.
    fn hspan(&mut self, x0: usize, x1: usize, y: usize, color: ColorIndex) {
        let start = y * self.width;
        let color = crate::types::wrap_index(color.into());
        self.pixels[start + x0..start + x1].fill(color);
    }

    fn plot(&mut self, x: i64, y: i64, color: ColorIndex) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, color);
        }
    }

    /// Whether a circle's bounding box overlaps the canvas.
    fn circle_touches(&self, cx: i64, cy: i64, r: i64) -> bool {
        r >= 0
            && cx + r >= 0
            && cy + r >= 0
            && cx - r < self.width as i64
            && cy - r < self.height as i64
    }

    /// Shorten a segment to the canvas plus [`LINE_MARGIN`] on every side.
    ///
    /// Segments already inside that box come back unchanged. Returns None
    /// when the segment misses the box entirely.
    fn cut_to_margin(
        &self,
        from: (i64, i64),
        to: (i64, i64),
    ) -> Option<((i64, i64), (i64, i64))> {
        let (lo, hi_x, hi_y) = (
            -LINE_MARGIN,
            self.width as i64 + LINE_MARGIN,
            self.height as i64 + LINE_MARGIN,
        );
        let inside = |(x, y): (i64, i64)| (lo..=hi_x).contains(&x) && (lo..=hi_y).contains(&y);
        if inside(from) && inside(to) {
            return Some((from, to));
        }

        // Liang-Barsky
        let (fx, fy) = (from.0 as f64, from.1 as f64);
        let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [
            (-dx, fx - lo as f64),
            (dx, hi_x as f64 - fx),
            (-dy, fy - lo as f64),
            (dy, hi_y as f64 - fy),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        let at = |t: f64| ((fx + t * dx).round() as i64, (fy + t * dy).round() as i64);
        Some((at(t0), at(t1)))
    }

    /// Intersect a rectangle with the canvas, as half-open usize bounds.
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        if rect.is_empty() {
            return None;
        }
        let x0 = i64::from(rect.x).max(0);
        let y0 = i64::from(rect.y).max(0);
        let x1 = (i64::from(rect.x) + i64::from(rect.w)).min(self.width as i64);
        let y1 = (i64::from(rect.y) + i64::from(rect.h)).min(self.height as i64);

        (x0 < x1 && y0 < y1).then(|| (x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

/// Half-width of a circle of radius `r` at `d` rows from its centre.
fn half_chord(r: i64, d: i64) -> Option<i64> {
    (d.abs() <= r).then(|| ((r * r - d * d) as f64).sqrt().floor() as i64)
}

/// Walk one octant of a midpoint circle, calling `f(x, y)` with `x >= y`.
fn for_each_octant_point(r: i64, mut f: impl FnMut(i64, i64)) {
    if r < 0 {
        return;
    }
    let (mut x, mut y) = (r, 0);
    let mut d = 1 - r;

    while x >= y {
        f(x, y);
        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * (y - x) + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn count(canvas: &Canvas, color: ColorIndex) -> usize {
        canvas.pixels().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn test_line_diagonal() {
        let mut canvas = Canvas::new(8, 8);
        canvas.line(0, 0, 7, 7, 3);

        assert_eq!(canvas.get_pixel(3, 3), Some(3));
        assert_eq!(canvas.get_pixel(7, 7), Some(3));
        assert_eq!(canvas.get_pixel(0, 7), Some(0));
        assert_eq!(count(&canvas, 3), 8);
    }

    #[test]
    fn test_line_includes_both_endpoints_any_direction() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line(8, 1, 1, 4, 2);

        assert_eq!(canvas.get_pixel(8, 1), Some(2));
        assert_eq!(canvas.get_pixel(1, 4), Some(2));
        // x-major: one pixel per column
        assert_eq!(count(&canvas, 2), 8);
    }

    #[test]
    fn test_line_single_point() {
        let mut canvas = Canvas::new(3, 3);
        canvas.line(1, 1, 1, 1, 4);
        assert_eq!(count(&canvas, 4), 1);
    }

    #[test]
    fn test_line_partially_off_canvas() {
        let mut canvas = Canvas::new(4, 4);
        canvas.line(-10, 2, 20, 2, 6);

        assert_eq!(canvas.row(2), &[6, 6, 6, 6]);
        assert_eq!(count(&canvas, 6), 4);
    }

    #[test]
    fn test_rect_filled_round_trip() {
        let mut canvas = Canvas::new(8, 8);
        canvas.rect_filled(2, 2, 3, 3, 5);

        for y in 0..8 {
            for x in 0..8 {
                let inside = Rect::new(2, 2, 3, 3).contains(Point::new(x, y));
                let expected = if inside { 5 } else { 0 };
                assert_eq!(canvas.get_pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rect_filled_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.rect_filled(-2, 3, 10, 10, 1);
        assert_eq!(count(&canvas, 1), 4);

        canvas.rect_filled(1, 1, 0, 3, 2);
        canvas.rect_filled(1, 1, 3, -1, 2);
        assert_eq!(count(&canvas, 2), 0);
    }

    #[test]
    fn test_rect_outline_border_only() {
        let mut canvas = Canvas::new(6, 6);
        canvas.rect_outline(1, 1, 4, 4, 8);

        assert_eq!(count(&canvas, 8), 12);
        assert_eq!(canvas.get_pixel(1, 1), Some(8));
        assert_eq!(canvas.get_pixel(4, 4), Some(8));
        assert_eq!(canvas.get_pixel(2, 2), Some(0));
    }

    #[test]
    fn test_rect_outline_thin() {
        let mut canvas = Canvas::new(5, 5);
        canvas.rect_outline(0, 2, 5, 1, 3);
        assert_eq!(count(&canvas, 3), 5);
    }

    #[test]
    fn test_circle_radius_zero_is_single_pixel() {
        let mut canvas = Canvas::new(5, 5);
        canvas.circle_filled(2, 2, 0, 9);
        assert_eq!(count(&canvas, 9), 1);

        let mut canvas = Canvas::new(5, 5);
        canvas.circle_outline(2, 2, 0, 9);
        assert_eq!(count(&canvas, 9), 1);
        assert_eq!(canvas.get_pixel(2, 2), Some(9));
    }

    #[test]
    fn test_circle_negative_radius_draws_nothing() {
        let mut canvas = Canvas::new(5, 5);
        canvas.circle_filled(2, 2, -1, 9);
        canvas.circle_outline(2, 2, -3, 9);
        assert_eq!(canvas.opaque_count(), 0);
    }

    #[test]
    fn test_circle_outline_radius_one_is_plus() {
        let mut canvas = Canvas::new(3, 3);
        canvas.circle_outline(1, 1, 1, 7);
        assert_eq!(canvas.pixels(), &[0, 7, 0, 7, 0, 7, 0, 7, 0]);
    }

    #[test]
    fn test_circle_filled_is_symmetric_and_solid() {
        let mut canvas = Canvas::new(11, 11);
        canvas.circle_filled(5, 5, 4, 2);

        assert_eq!(canvas.get_pixel(5, 5), Some(2));
        assert_eq!(canvas.get_pixel(1, 5), Some(2));
        assert_eq!(canvas.get_pixel(9, 5), Some(2));
        assert_eq!(canvas.get_pixel(5, 0), Some(0));
        for y in 0..11 {
            for x in 0..11 {
                assert_eq!(
                    canvas.get_pixel(x, y),
                    canvas.get_pixel(10 - x, y),
                    "mirror at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_circle_outline_inside_filled() {
        let mut outline = Canvas::new(15, 15);
        outline.circle_outline(7, 7, 6, 1);
        let mut filled = Canvas::new(15, 15);
        filled.circle_filled(7, 7, 6, 1);

        for (o, f) in outline.pixels().iter().zip(filled.pixels()) {
            if *o == 1 {
                assert_eq!(*f, 1);
            }
        }
        assert!(filled.opaque_count() > outline.opaque_count());
    }

    #[test]
    fn test_circle_off_canvas() {
        let mut canvas = Canvas::new(4, 4);
        canvas.circle_filled(-3, -3, 4, 5);
        canvas.circle_outline(100, 100, 4, 5);
        assert!(canvas.get_pixel(0, 0) == Some(5));
        assert!(count(&canvas, 5) < 16);
    }

    #[test]
    fn test_far_line_is_cut_to_canvas() {
        let mut canvas = Canvas::new(8, 4);
        canvas.line(i32::MIN, 2, i32::MAX, 2, 3);
        assert_eq!(canvas.row(2), &[3; 8]);
        assert_eq!(count(&canvas, 3), 8);

        canvas.line(i32::MIN, i32::MIN, -1, i32::MAX, 4);
        assert_eq!(count(&canvas, 4), 0);
    }

    #[test]
    fn test_far_line_keeps_its_slope() {
        let mut near = Canvas::new(10, 10);
        near.line(0, 0, 9, 9, 1);
        let mut far = Canvas::new(10, 10);
        far.line(-1_000_000, -1_000_000, 1_000_000, 1_000_000, 1);
        assert_eq!(far, near);
    }

    #[test]
    fn test_extreme_rect_outline() {
        let mut canvas = Canvas::new(4, 4);
        canvas.rect_outline(i32::MAX, 0, 2, 2, 3);
        canvas.rect_outline(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 3);
        assert_eq!(canvas.opaque_count(), 0);

        canvas.rect_outline(-1, -1, i32::MAX, 3, 5);
        assert_eq!(canvas.row(0), &[0; 4]);
        assert_eq!(canvas.row(1), &[5; 4]);
    }

    #[test]
    fn test_huge_circles() {
        let mut canvas = Canvas::new(6, 6);
        canvas.circle_filled(3, 3, i32::MAX, 2);
        assert_eq!(count(&canvas, 2), 36);

        let mut canvas = Canvas::new(6, 6);
        canvas.circle_outline(3, 3, i32::MAX, 2);
        assert_eq!(canvas.opaque_count(), 0);

        // An arc far from its centre still crosses the canvas
        let mut canvas = Canvas::new(6, 6);
        canvas.circle_outline(-1_000_000, 3, 1_000_003, 7);
        assert_eq!(canvas.get_pixel(3, 3), Some(7));
        assert_eq!(canvas.get_pixel(0, 3), Some(0));

        canvas.circle_filled(i32::MIN, i32::MIN, 10, 9);
        canvas.circle_outline(i32::MAX, 0, 10, 9);
        assert_eq!(count(&canvas, 9), 0);
    }
}
