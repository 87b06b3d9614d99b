//! pxpaint - Indexed-colour pixel-art paint engine
//!
//! A raster canvas of palette indices driven by a fixed set of tools:
//! freehand pencil and brush, shapes, stamps, eight procedural brushes and
//! eight whole-canvas filters. Input arrives as per-frame pointer state;
//! session scripts replay it headlessly.

pub mod assets;
pub mod brush;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod preview;
pub mod script;
pub mod selection;
pub mod session;
pub mod tool;
pub mod types;
pub mod validation;

pub use assets::{Assets, BuiltinGlyphs, BuiltinStamps, Frame, SpriteSheet};
pub use brush::{BrushClock, BrushInput, BrushKind};
pub use canvas::{Canvas, DrawOp};
pub use config::Config;
pub use error::{PaintError, Result};
pub use filter::{FilterKind, Histogram};
pub use script::{Script, Step};
pub use selection::{Cycle, Direction, Selection, ToolKind, BRUSH_SIZES};
pub use session::Session;
pub use tool::{ButtonState, Dispatcher, FrameInput, SessionState, StrokeState};
pub use types::{ColorIndex, Colour, PaletteLayer, Point, Rect};
pub use validation::{validate_script, Diagnostic, Severity, ValidationResult};
