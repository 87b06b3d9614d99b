//! List command implementation.
//!
//! Prints the fixed tables a script can select from.

use clap::Args;

use crate::assets::Assets;
use crate::brush::BrushKind;
use crate::error::Result;
use crate::filter::FilterKind;
use crate::output::Printer;
use crate::selection::{ToolKind, BRUSH_SIZES};
use crate::types::{DISPLAY_PALETTE, PALETTE_LAYERS};

/// List tools, brushes, filters, stamps and palette layers
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show the display colour of every palette index
    #[arg(long)]
    pub colours: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let assets = Assets::builtin();

    printer.info("Tools", &join(ToolKind::ALL.iter().map(|t| t.name())));
    printer.info("Brushes", &indexed(BrushKind::ALL.iter().map(|b| b.name())));
    printer.info("Filters", &indexed(FilterKind::ALL.iter().map(|f| f.name())));
    printer.info("Stamps", &indexed(assets.stamps.names()));
    printer.info("Glyphs", &assets.glyphs.names().collect::<String>());
    printer.info("Sizes", &join(BRUSH_SIZES.iter().map(|s| s.to_string())));

    for (i, layer) in PALETTE_LAYERS.iter().enumerate() {
        let swatches = join(layer.iter().map(|c| c.to_string()));
        printer.info(&format!("Layer {}", i), &swatches);
    }

    if args.colours {
        for (i, colour) in DISPLAY_PALETTE.iter().enumerate() {
            printer.info(&format!("Colour {:>2}", i), &colour.to_string());
        }
    }

    Ok(())
}

fn join<S: AsRef<str>>(items: impl Iterator<Item = S>) -> String {
    items
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "0 name, 1 name, ..." so scripts can select by index.
fn indexed<'a>(names: impl Iterator<Item = &'a str>) -> String {
    join(names.enumerate().map(|(i, n)| format!("{} {}", i, n)))
}
