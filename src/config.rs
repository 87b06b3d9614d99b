//! Session configuration (pxpaint.yaml).
//!
//! Sets the canvas size, the starting colour, an optional RNG seed and
//! optional overrides for the display palette. Every field has a default,
//! so an empty file is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::selection::DEFAULT_COLOR;
use crate::types::{ColorIndex, Colour, DISPLAY_PALETTE, PALETTE_SIZE};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "pxpaint.yaml";

/// Session configuration loaded from pxpaint.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Seed for the random brushes. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Colour selected when the session starts.
    #[serde(default = "default_color")]
    pub color: ColorIndex,

    /// Display colours for indices 0.. as hex strings, replacing the
    /// built-in palette entry by entry.
    #[serde(default)]
    pub colours: Vec<String>,
}

fn default_width() -> usize {
    256
}

fn default_height() -> usize {
    128
}

fn default_color() -> ColorIndex {
    DEFAULT_COLOR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: None,
            color: default_color(),
            colours: vec![],
        }
    }
}

impl Config {
    /// Load config from a pxpaint.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PaintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else pxpaint.yaml in the working directory if
    /// present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.is_file() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| PaintError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PaintError::Validation {
                message: format!("Canvas size {}x{} is empty", self.width, self.height),
                help: Some("width and height must both be at least 1".to_string()),
            });
        }
        if self.colours.len() > PALETTE_SIZE {
            return Err(PaintError::Validation {
                message: format!(
                    "{} display colours given, the palette has {}",
                    self.colours.len(),
                    PALETTE_SIZE
                ),
                help: None,
            });
        }
        Ok(())
    }

    /// The display palette with any overrides applied.
    pub fn display_palette(&self) -> Result<[Colour; PALETTE_SIZE]> {
        let mut palette = DISPLAY_PALETTE;
        for (slot, hex) in palette.iter_mut().zip(&self.colours) {
            *slot = Colour::from_hex(hex)?;
        }
        Ok(palette)
    }
}
