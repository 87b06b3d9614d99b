//! Colour indices and the display palette.
//!
//! Canvas pixels hold a small palette index rather than an RGB value. The
//! RGB side only matters when the canvas is shown on a display.

use std::fmt;
use std::str::FromStr;

use crate::error::{PaintError, Result};

/// A palette index. Always in `[0, PALETTE_SIZE)` once it reaches the canvas.
pub type ColorIndex = u8;

/// Number of colours in the fixed palette.
pub const PALETTE_SIZE: usize = 16;

/// Highest valid colour index.
pub const MAX_INDEX: ColorIndex = (PALETTE_SIZE - 1) as ColorIndex;

/// Index treated as transparent by blits and filters.
pub const TRANSPARENT: ColorIndex = 0;

/// Wrap an arbitrary value into the palette range.
pub fn wrap_index(value: i64) -> ColorIndex {
    value.rem_euclid(PALETTE_SIZE as i64) as ColorIndex
}

/// An opaque RGB colour used to display a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 if hex.is_ascii() => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(PaintError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Convert to an RGB triple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The default 16-colour display palette.
pub const DISPLAY_PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::from_u32(0x000000), // 0  black
    Colour::from_u32(0x2B335F), // 1  navy
    Colour::from_u32(0x7E2072), // 2  purple
    Colour::from_u32(0x19959C), // 3  teal
    Colour::from_u32(0x8B4852), // 4  brown
    Colour::from_u32(0x395C98), // 5  slate
    Colour::from_u32(0xA9C1FF), // 6  light blue
    Colour::from_u32(0xEEEEEE), // 7  white
    Colour::from_u32(0xD4186C), // 8  red
    Colour::from_u32(0xD38441), // 9  orange
    Colour::from_u32(0xE9C35B), // 10 yellow
    Colour::from_u32(0x70C6A9), // 11 green
    Colour::from_u32(0x7696DE), // 12 blue
    Colour::from_u32(0xA3A3A3), // 13 grey
    Colour::from_u32(0xFF9798), // 14 pink
    Colour::from_u32(0xEDC7B0), // 15 peach
];

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PaintError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PaintError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
