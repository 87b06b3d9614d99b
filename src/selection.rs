//! Palette and selection state.
//!
//! Everything the toolbar can change lives here. Index fields are private
//! so the only way to move them is through [`Cycle`], which wraps into the
//! size of the table being indexed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::brush::BrushKind;
use crate::filter::FilterKind;
use crate::types::{wrap_index, ColorIndex, PaletteLayer, LAYER_COUNT};

/// Brush sizes offered by the size picker, in pixels.
pub const BRUSH_SIZES: [i32; 4] = [1, 3, 6, 12];

/// Default drawing colour.
pub const DEFAULT_COLOR: ColorIndex = 7;

/// Drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    #[default]
    Pencil,
    Brush,
    Eraser,
    Fill,
    Line,
    Rect,
    Circle,
    Clear,
    Stamp,
    AlgoBrush,
    Filter,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        ToolKind::Pencil,
        ToolKind::Brush,
        ToolKind::Eraser,
        ToolKind::Fill,
        ToolKind::Line,
        ToolKind::Rect,
        ToolKind::Circle,
        ToolKind::Clear,
        ToolKind::Stamp,
        ToolKind::AlgoBrush,
        ToolKind::Filter,
        ToolKind::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
            ToolKind::Fill => "fill",
            ToolKind::Line => "line",
            ToolKind::Rect => "rect",
            ToolKind::Circle => "circle",
            ToolKind::Clear => "clear",
            ToolKind::Stamp => "stamp",
            ToolKind::AlgoBrush => "algo-brush",
            ToolKind::Filter => "filter",
            ToolKind::Text => "text",
        }
    }

    /// Tools that draw only once the pointer is released.
    pub fn is_shape(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Rect | ToolKind::Circle)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction for relative moves through a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// A move through one of the selection tables.
///
/// In YAML this is either `next`, `prev` or a plain index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cycle {
    Step(Direction),
    To(usize),
}

impl Cycle {
    pub const NEXT: Cycle = Cycle::Step(Direction::Next);
    pub const PREV: Cycle = Cycle::Step(Direction::Prev);

    /// Resolve against a table of `count` entries, always landing in
    /// `[0, count)`. An empty table pins the index at 0.
    pub fn resolve(self, current: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            Cycle::Step(Direction::Next) => (current + 1) % count,
            Cycle::Step(Direction::Prev) => (current + count - 1) % count,
            Cycle::To(index) => index % count,
        }
    }
}

/// Current tool, colour and table positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    tool: ToolKind,
    color: ColorIndex,
    size_index: usize,
    palette_layer: usize,
    stamp_index: usize,
    brush: BrushKind,
    filter: FilterKind,
    char_index: usize,

    #[serde(skip)]
    stamp_count: usize,
    #[serde(skip)]
    glyph_count: usize,
}

impl Selection {
    /// Create a selection for asset tables of the given sizes.
    pub fn new(stamp_count: usize, glyph_count: usize) -> Self {
        Self {
            tool: ToolKind::default(),
            color: DEFAULT_COLOR,
            size_index: 0,
            palette_layer: 0,
            stamp_index: 0,
            brush: BrushKind::default(),
            filter: FilterKind::default(),
            char_index: 0,
            stamp_count,
            glyph_count,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Switch tools. Side effects of selecting a tool belong to the
    /// dispatcher, not here.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn color(&self) -> ColorIndex {
        self.color
    }

    /// Set the colour, wrapping into the palette.
    pub fn set_color(&mut self, color: i64) {
        self.color = wrap_index(color);
    }

    /// Pick a swatch from the current palette layer.
    pub fn pick_swatch(&mut self, slot: usize) {
        self.color = self.layer().colour(slot as u64);
    }

    pub fn layer(&self) -> PaletteLayer {
        PaletteLayer::get(self.palette_layer)
    }

    pub fn cycle_layer(&mut self, cycle: Cycle) {
        self.palette_layer = cycle.resolve(self.palette_layer, LAYER_COUNT);
    }

    /// Nominal brush size in pixels.
    pub fn brush_size(&self) -> i32 {
        BRUSH_SIZES[self.size_index]
    }

    pub fn cycle_size(&mut self, cycle: Cycle) {
        self.size_index = cycle.resolve(self.size_index, BRUSH_SIZES.len());
    }

    pub fn stamp_index(&self) -> usize {
        self.stamp_index
    }

    pub fn cycle_stamp(&mut self, cycle: Cycle) {
        self.stamp_index = cycle.resolve(self.stamp_index, self.stamp_count);
    }

    pub fn brush(&self) -> BrushKind {
        self.brush
    }

    pub fn cycle_brush(&mut self, cycle: Cycle) {
        self.brush = BrushKind::from_index(cycle.resolve(self.brush.index(), BrushKind::ALL.len()));
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn cycle_filter(&mut self, cycle: Cycle) {
        self.filter =
            FilterKind::from_index(cycle.resolve(self.filter.index(), FilterKind::ALL.len()));
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn cycle_glyph(&mut self, cycle: Cycle) {
        self.char_index = cycle.resolve(self.char_index, self.glyph_count);
    }
}
