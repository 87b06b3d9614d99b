//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::assets::Assets;
use crate::config::Config;
use crate::error::{PaintError, Result};
use crate::output::{display_path, plural, Printer};
use crate::script::Script;
use crate::validation::{print_diagnostics, validate_script, Bounds, ValidationResult};

/// Check session scripts without running them
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scripts to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file giving the canvas size (default: ./pxpaint.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let config = Config::discover(args.config.as_deref())?;
    let bounds = Bounds {
        width: config.width,
        height: config.height,
    };
    let assets = Assets::builtin();

    let mut total = ValidationResult::new();
    for file in &args.files {
        printer.status("Checking", &display_path(file));
        let script = Script::load(file)?;
        let result = validate_script(&script, bounds, &assets);
        print_diagnostics(&result, printer);
        total.merge(result);
    }

    let summary = format!(
        "{}, {}",
        plural(total.error_count(), "error", "errors"),
        plural(total.warning_count(), "warning", "warnings")
    );

    if total.has_errors() {
        printer.error("Failed", &summary);
        return Err(PaintError::Validation {
            message: format!("{} failed validation", plural(args.files.len(), "script", "scripts")),
            help: None,
        });
    }

    if total.has_warnings() {
        printer.warning("Passed", &summary);
    } else {
        printer.status(
            "Passed",
            &plural(args.files.len(), "script", "scripts"),
        );
    }
    Ok(())
}
