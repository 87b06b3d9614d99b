//! Session scripts.
//!
//! A script stands in for the interactive event loop: a YAML list of
//! toolbar changes and pointer gestures that a [`Session`] plays back
//! frame by frame.
//!
//! ```yaml
//! name: squares demo
//! steps:
//!   - tool: algo-brush
//!   - brush: 4
//!   - stroke: [[10, 10], [20, 12], [30, 14]]
//!   - tool: filter
//!   - filter: next
//!   - tap: [0, 0]
//! ```
//!
//! [`Session`]: crate::session::Session

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::selection::{Cycle, ToolKind};
use crate::tool::{ButtonState, FrameInput};
use crate::types::Point;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Select a tool.
    Tool(ToolKind),
    /// Set the colour index directly; wraps into the palette.
    Color(i64),
    /// Pick a swatch slot from the current palette layer.
    Swatch(usize),
    Palette(Cycle),
    Size(Cycle),
    Stamp(Cycle),
    Brush(Cycle),
    Filter(Cycle),
    Glyph(Cycle),
    /// Press and release at one point.
    Tap(Point),
    /// Press at the first point, drag through the rest, release at the last.
    Stroke(Vec<Point>),
    /// A single frame with explicit button state.
    Frame(RawFrame),
    /// Idle frames with the pointer where it was.
    Wait(u64),
}

impl Step {
    /// Short label used in diagnostics and status output.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Tool(_) => "tool",
            Step::Color(_) => "color",
            Step::Swatch(_) => "swatch",
            Step::Palette(_) => "palette",
            Step::Size(_) => "size",
            Step::Stamp(_) => "stamp",
            Step::Brush(_) => "brush",
            Step::Filter(_) => "filter",
            Step::Glyph(_) => "glyph",
            Step::Tap(_) => "tap",
            Step::Stroke(_) => "stroke",
            Step::Frame(_) => "frame",
            Step::Wait(_) => "wait",
        }
    }

    /// Pointer positions this step visits.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Step::Tap(p) => vec![*p],
            Step::Stroke(points) => points.clone(),
            Step::Frame(raw) => vec![raw.at],
            _ => vec![],
        }
    }

    /// Expand a pointer step into frames numbered from `first_frame`.
    ///
    /// `pointer` is where the pointer was left by the previous step; it is
    /// used by `wait`. Selection steps produce no frames.
    pub fn frames(&self, pointer: Point, first_frame: u64) -> Vec<FrameInput> {
        match self {
            Step::Tap(p) => vec![
                FrameInput::press(*p, first_frame),
                FrameInput::release(*p, first_frame + 1),
            ],
            Step::Stroke(points) => {
                let Some((&first, rest)) = points.split_first() else {
                    return vec![];
                };
                let mut frames = Vec::with_capacity(points.len() + 1);
                frames.push(FrameInput::press(first, first_frame));
                let mut frame = first_frame + 1;
                for &p in rest {
                    frames.push(FrameInput::hold(p, frame));
                    frame += 1;
                }
                let last = rest.last().copied().unwrap_or(first);
                frames.push(FrameInput::release(last, frame));
                frames
            }
            Step::Frame(raw) => vec![FrameInput {
                pointer: raw.at,
                button: ButtonState {
                    pressed: raw.pressed,
                    held: raw.held,
                    released: raw.released,
                },
                frame: first_frame,
            }],
            Step::Wait(n) => (0..*n)
                .map(|i| FrameInput::hover(pointer, first_frame + i))
                .collect(),
            _ => vec![],
        }
    }
}

/// A frame spelled out in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrame {
    pub at: Point,
    #[serde(default)]
    pub pressed: bool,
    #[serde(default)]
    pub held: bool,
    #[serde(default)]
    pub released: bool,
}

/// A parsed session script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PaintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read script: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a script from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PaintError::Script {
            message: format!("Invalid script: {}", e),
            help: Some(
                "Each step is a single-key map such as `tool: pencil` or `tap: [4, 4]`"
                    .to_string(),
            ),
        })
    }

    /// Total frames the script will feed the dispatcher.
    pub fn frame_count(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| s.frames(Point::ORIGIN, 0).len() as u64)
            .sum()
    }
}
