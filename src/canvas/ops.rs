//! Draw operations as data.
//!
//! Procedural brushes and shape tools describe their output as a batch of
//! `DrawOp`s before anything touches the canvas. The same op drives both a
//! shape's preview and its final commit.

use super::Canvas;
use crate::types::{ColorIndex, Point, Rect};

/// A single primitive draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Pixel {
        at: Point,
        color: ColorIndex,
    },
    Line {
        from: Point,
        to: Point,
        color: ColorIndex,
    },
    RectFilled {
        rect: Rect,
        color: ColorIndex,
    },
    RectOutline {
        rect: Rect,
        color: ColorIndex,
    },
    CircleFilled {
        center: Point,
        radius: i32,
        color: ColorIndex,
    },
    CircleOutline {
        center: Point,
        radius: i32,
        color: ColorIndex,
    },
}

impl DrawOp {
    /// The colour this op draws with.
    pub fn color(&self) -> ColorIndex {
        match *self {
            DrawOp::Pixel { color, .. }
            | DrawOp::Line { color, .. }
            | DrawOp::RectFilled { color, .. }
            | DrawOp::RectOutline { color, .. }
            | DrawOp::CircleFilled { color, .. }
            | DrawOp::CircleOutline { color, .. } => color,
        }
    }
}

impl Canvas {
    /// Execute one draw op.
    pub fn draw(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Pixel { at, color } => self.set_pixel(at.x, at.y, color),
            DrawOp::Line { from, to, color } => self.line(from.x, from.y, to.x, to.y, color),
            DrawOp::RectFilled { rect, color } => {
                self.rect_filled(rect.x, rect.y, rect.w, rect.h, color)
            }
            DrawOp::RectOutline { rect, color } => {
                self.rect_outline(rect.x, rect.y, rect.w, rect.h, color)
            }
            DrawOp::CircleFilled {
                center,
                radius,
                color,
            } => self.circle_filled(center.x, center.y, radius, color),
            DrawOp::CircleOutline {
                center,
                radius,
                color,
            } => self.circle_outline(center.x, center.y, radius, color),
        }
    }

    /// Execute a batch of draw ops in order.
    pub fn draw_all<'a>(&mut self, ops: impl IntoIterator<Item = &'a DrawOp>) {
        for op in ops {
            self.draw(op);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_matches_direct_calls() {
        let mut direct = Canvas::new(12, 12);
        direct.line(0, 0, 11, 5, 3);
        direct.rect_outline(2, 2, 5, 4, 4);
        direct.circle_filled(8, 8, 3, 5);

        let mut batched = Canvas::new(12, 12);
        batched.draw_all(&[
            DrawOp::Line {
                from: Point::new(0, 0),
                to: Point::new(11, 5),
                color: 3,
            },
            DrawOp::RectOutline {
                rect: Rect::new(2, 2, 5, 4),
                color: 4,
            },
            DrawOp::CircleFilled {
                center: Point::new(8, 8),
                radius: 3,
                color: 5,
            },
        ]);

        assert_eq!(direct, batched);
    }

    #[test]
    fn test_op_color() {
        let op = DrawOp::Pixel {
            at: Point::ORIGIN,
            color: 11,
        };
        assert_eq!(op.color(), 11);
    }
}
