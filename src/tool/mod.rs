//! The tool dispatcher.
//!
//! Turns one frame of pointer input plus the current selection into canvas
//! calls. A stroke is Idle until the button goes down over the canvas,
//! then Drawing until it is released; the per-tool behaviour for each edge
//! lives in [`Dispatcher::begin`], [`Dispatcher::continue_stroke`] and
//! [`Dispatcher::finish`].

mod shape;
mod stroke;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::assets::Assets;
use crate::brush::{self, BrushClock, BrushInput};
use crate::canvas::{Canvas, DrawOp};
use crate::selection::{Selection, ToolKind};
use crate::types::{Point, TRANSPARENT};

pub use shape::shape_op;
pub use stroke::{brush_dab, brush_sweep, pencil_dab, pencil_sweep, StrokeState};

/// Stamps re-apply on frames divisible by this while dragging.
pub const STAMP_CADENCE: u64 = 2;

/// Button edges for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ButtonState {
    /// Went down this frame.
    pub pressed: bool,
    /// Down this frame, including the frame it was pressed.
    pub held: bool,
    /// Went up this frame.
    pub released: bool,
}

/// One frame of pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameInput {
    pub pointer: Point,
    pub button: ButtonState,
    /// Monotonic frame counter.
    pub frame: u64,
}

impl FrameInput {
    /// Pointer moves with the button up.
    pub fn hover(pointer: Point, frame: u64) -> Self {
        Self {
            pointer,
            button: ButtonState::default(),
            frame,
        }
    }

    pub fn press(pointer: Point, frame: u64) -> Self {
        Self {
            pointer,
            button: ButtonState {
                pressed: true,
                held: true,
                released: false,
            },
            frame,
        }
    }

    pub fn hold(pointer: Point, frame: u64) -> Self {
        Self {
            pointer,
            button: ButtonState {
                pressed: false,
                held: true,
                released: false,
            },
            frame,
        }
    }

    pub fn release(pointer: Point, frame: u64) -> Self {
        Self {
            pointer,
            button: ButtonState {
                pressed: false,
                held: false,
                released: true,
            },
            frame,
        }
    }
}

/// Everything that persists between frames.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub selection: Selection,
    pub stroke: StrokeState,
    pub clock: BrushClock,
}

/// Drives a canvas from frame input.
pub struct Dispatcher {
    state: SessionState,
    assets: Assets,
    rng: StdRng,
}

impl Dispatcher {
    /// Create a dispatcher over the given sheets.
    ///
    /// With a seed, every random brush is reproducible.
    pub fn new(assets: Assets, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let selection = Selection::new(assets.stamps.len(), assets.glyphs.len());
        Self {
            state: SessionState {
                selection,
                stroke: StrokeState::default(),
                clock: BrushClock::default(),
            },
            assets,
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Mutable access for toolbar changes. Use [`Dispatcher::select_tool`]
    /// to change tools so that Clear takes effect.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.state.selection
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Switch tools. Selecting Clear wipes the canvas straight away.
    pub fn select_tool(&mut self, canvas: &mut Canvas, tool: ToolKind) {
        self.state.selection.set_tool(tool);
        if tool == ToolKind::Clear {
            canvas.clear(TRANSPARENT);
        }
    }

    /// Process one frame.
    pub fn frame(&mut self, canvas: &mut Canvas, input: &FrameInput) {
        let at = input.pointer;
        let over_canvas = canvas.in_bounds(at.x, at.y);

        if input.button.pressed {
            if over_canvas {
                self.begin(canvas, at);
            }
        } else if input.button.held && self.state.stroke.drawing && over_canvas {
            self.continue_stroke(canvas, at, input.frame);
        }

        if input.button.released && self.state.stroke.drawing {
            self.finish(canvas, at);
        }

        self.state.stroke.previous = Some(at);
    }

    /// The uncommitted shape for the current drag, if a shape tool is active.
    pub fn preview(&self, pointer: Point) -> Option<DrawOp> {
        let stroke = &self.state.stroke;
        let sel = &self.state.selection;
        if !stroke.drawing || !sel.tool().is_shape() {
            return None;
        }
        shape_op(sel.tool(), stroke.start, pointer, sel.color())
    }

    fn begin(&mut self, canvas: &mut Canvas, at: Point) {
        self.state.stroke.begin(at);
        let sel = &self.state.selection;

        match sel.tool() {
            ToolKind::Pencil => canvas.draw(&pencil_dab(at, sel.brush_size(), sel.color())),
            ToolKind::Eraser => canvas.draw(&pencil_dab(at, sel.brush_size(), TRANSPARENT)),
            ToolKind::Brush => canvas.draw(&brush_dab(at, sel.brush_size() * 2, sel.color())),
            ToolKind::Fill => canvas.clear(sel.color()),
            ToolKind::Stamp => self.stamp(canvas, at),
            ToolKind::AlgoBrush => self.run_brush(canvas, at),
            ToolKind::Filter => *canvas = sel.filter().apply(canvas),
            ToolKind::Text => self.text(canvas, at),
            ToolKind::Line | ToolKind::Rect | ToolKind::Circle | ToolKind::Clear => {}
        }
    }

    fn continue_stroke(&mut self, canvas: &mut Canvas, at: Point, frame: u64) {
        let from = self.state.stroke.previous.unwrap_or(at);
        let sel = &self.state.selection;

        match sel.tool() {
            ToolKind::Pencil => {
                canvas.draw_all(&pencil_sweep(from, at, sel.brush_size(), sel.color()));
            }
            ToolKind::Eraser => {
                canvas.draw_all(&pencil_sweep(from, at, sel.brush_size(), TRANSPARENT));
            }
            ToolKind::Brush => {
                canvas.draw_all(&brush_sweep(from, at, sel.brush_size() * 2, sel.color()));
            }
            ToolKind::Stamp => {
                if frame % STAMP_CADENCE == 0 {
                    self.stamp(canvas, at);
                }
            }
            ToolKind::AlgoBrush => self.run_brush(canvas, at),
            ToolKind::Fill
            | ToolKind::Line
            | ToolKind::Rect
            | ToolKind::Circle
            | ToolKind::Clear
            | ToolKind::Filter
            | ToolKind::Text => {}
        }
    }

    fn finish(&mut self, canvas: &mut Canvas, at: Point) {
        if let Some(op) = self.preview(at) {
            canvas.draw(&op);
        }
        self.state.stroke.end();
    }

    fn stamp(&self, canvas: &mut Canvas, at: Point) {
        let sheet = &self.assets.stamps;
        if let Some(frame) = sheet.frame(self.state.selection.stamp_index()) {
            canvas.blit(frame.centered_at(at), sheet.image(), frame.rect, TRANSPARENT);
        }
    }

    fn text(&self, canvas: &mut Canvas, at: Point) {
        let sheet = &self.assets.glyphs;
        let sel = &self.state.selection;
        if let Some(frame) = sheet.frame(sel.char_index()) {
            canvas.stencil(
                frame.centered_at(at),
                sheet.image(),
                frame.rect,
                TRANSPARENT,
                sel.color(),
            );
        }
    }

    fn run_brush(&mut self, canvas: &mut Canvas, at: Point) {
        let input = BrushInput {
            cursor: at,
            previous: self.state.stroke.previous,
            clock: self.state.clock,
            layer: self.state.selection.layer(),
        };
        let kind = self.state.selection.brush();
        self.state.clock = brush::apply(kind, canvas, &input, &mut self.rng);
    }
}
