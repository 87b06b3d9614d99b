//! Replay command implementation.
//!
//! Plays a session script against a fresh canvas and prints the result.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::assets::Assets;
use crate::config::Config;
use crate::error::{PaintError, Result};
use crate::output::{display_path, plural, Printer};
use crate::preview::{render_ansi, render_hex, Snapshot};
use crate::script::Script;
use crate::session::Session;
use crate::validation::{print_diagnostics, validate_script, Bounds};

/// Output format for the final canvas.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Coloured half-blocks on a terminal, hex digits otherwise
    #[default]
    Text,
    /// JSON snapshot of the canvas and session state
    Json,
}

/// Play a session script against a blank canvas and print the result
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Script to play
    pub script: PathBuf,

    /// Config file (default: ./pxpaint.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Seed for the random brushes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Canvas width, overriding the config
    #[arg(long)]
    pub width: Option<usize>,

    /// Canvas height, overriding the config
    #[arg(long)]
    pub height: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print hex digits even on a colour terminal
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: ReplayArgs, printer: &Printer) -> Result<()> {
    let config = effective_config(&args)?;
    let palette = config.display_palette()?;
    let script = Script::load(&args.script)?;

    let bounds = Bounds {
        width: config.width,
        height: config.height,
    };
    let result = validate_script(&script, bounds, &Assets::builtin());
    print_diagnostics(&result, printer);
    if result.has_errors() {
        return Err(PaintError::Validation {
            message: format!(
                "{} has {}",
                display_path(&args.script),
                plural(result.error_count(), "error", "errors")
            ),
            help: Some("Run `pxpaint validate` for details".to_string()),
        });
    }

    let name = script
        .name
        .clone()
        .unwrap_or_else(|| display_path(&args.script));
    printer.status(
        "Replaying",
        &format!(
            "{} ({}, {}x{})",
            printer.cyan(&name),
            plural(script.steps.len(), "step", "steps"),
            config.width,
            config.height
        ),
    );

    let mut session = Session::new(&config);
    session.run(&script);

    let canvas = session.composite();
    printer.status(
        "Finished",
        &format!(
            "{}, {} painted",
            plural(session.frames() as usize, "frame", "frames"),
            plural(canvas.opaque_count(), "pixel", "pixels")
        ),
    );

    let output = match args.format {
        Format::Json => {
            let state = session.dispatcher().state();
            let mut json =
                Snapshot::new(&canvas, session.frames(), state.clock, &state.selection).to_json()?;
            json.push('\n');
            json
        }
        Format::Text if !args.plain && io::stdout().is_terminal() => render_ansi(&canvas, &palette),
        Format::Text => render_hex(&canvas),
    };

    io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

/// Config file values with command-line overrides applied.
fn effective_config(args: &ReplayArgs) -> Result<Config> {
    let mut config = Config::discover(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if config.width == 0 || config.height == 0 {
        return Err(PaintError::Validation {
            message: format!("Canvas size {}x{} is empty", config.width, config.height),
            help: Some("--width and --height must be at least 1".to_string()),
        });
    }
    Ok(config)
}
