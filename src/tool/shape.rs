//! Shape tool geometry.
//!
//! Line, rect and circle draw nothing until release. While the pointer is
//! held the same op is available as a non-committing preview.

use crate::canvas::DrawOp;
use crate::selection::ToolKind;
use crate::types::{ColorIndex, Point, Rect};

/// The op a shape tool commits for a drag from `start` to `end`.
///
/// Returns None for tools that are not shapes.
pub fn shape_op(tool: ToolKind, start: Point, end: Point, color: ColorIndex) -> Option<DrawOp> {
    let op = match tool {
        ToolKind::Line => DrawOp::Line {
            from: start,
            to: end,
            color,
        },
        ToolKind::Rect => DrawOp::RectFilled {
            rect: Rect::from_corners(start, end),
            color,
        },
        ToolKind::Circle => DrawOp::CircleFilled {
            center: start,
            radius: start.distance(end).floor() as i32,
            color,
        },
        _ => return None,
    };
    Some(op)
}
