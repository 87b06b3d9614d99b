//! Validation for session scripts.
//!
//! Runs a suite of checks against a parsed script and reports errors and
//! warnings. Used by `pxpaint validate` and before `pxpaint replay`.

mod checks;
mod warning;

pub use checks::Bounds;
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::assets::Assets;
use crate::output::Printer;
use crate::script::Script;

/// Run all validation checks against a script.
pub fn validate_script(script: &Script, bounds: Bounds, assets: &Assets) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty(script));
    result.merge(checks::check_empty_strokes(script));
    result.merge(checks::check_press_position(script, bounds));
    result.merge(checks::check_wrapping_indices(script, assets));
    result.merge(checks::check_raw_frames(script));
    result.merge(checks::check_waits(script));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}", with_label(d, &label));
        if let Some(help) = &d.help {
            eprintln!("    {}: {}", printer.dim("help"), help);
        }
    }
}

/// The diagnostic's display form with its severity swapped for `label`.
fn with_label(d: &Diagnostic, label: &str) -> String {
    let line = d.to_string();
    let rest = line.strip_prefix(&d.severity.to_string()).unwrap_or(line.as_str());
    format!("{}{}", label, rest)
}
