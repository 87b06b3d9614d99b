use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxpaint operations.
///
/// The paint engine itself never fails: off-canvas coordinates are clipped
/// and indices wrap. Errors only come from the edges (config files, session
/// scripts, the CLI).
#[derive(Error, Diagnostic, Debug)]
pub enum PaintError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxpaint::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxpaint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxpaint::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pxpaint::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(pxpaint::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Script error: {message}")]
    #[diagnostic(code(pxpaint::script))]
    Script {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PaintError>;
