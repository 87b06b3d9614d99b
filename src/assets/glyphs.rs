//! A 3x5 bitmap font for the text tool.

use super::SpriteSheet;
use crate::canvas::Canvas;
use crate::types::ColorIndex;

/// Index glyph pixels are stored in. The text tool recolours them.
pub const GLYPH_INK: ColorIndex = 7;

const GLYPH_WIDTH: usize = 3;

/// Rows are 3-bit masks, most significant bit on the left.
const FONT: [(char, [u8; 5]); 36] = [
    ('A', [0b010, 0b101, 0b111, 0b101, 0b101]),
    ('B', [0b110, 0b101, 0b110, 0b101, 0b110]),
    ('C', [0b011, 0b100, 0b100, 0b100, 0b011]),
    ('D', [0b110, 0b101, 0b101, 0b101, 0b110]),
    ('E', [0b111, 0b100, 0b110, 0b100, 0b111]),
    ('F', [0b111, 0b100, 0b110, 0b100, 0b100]),
    ('G', [0b011, 0b100, 0b101, 0b101, 0b011]),
    ('H', [0b101, 0b101, 0b111, 0b101, 0b101]),
    ('I', [0b111, 0b010, 0b010, 0b010, 0b111]),
    ('J', [0b001, 0b001, 0b001, 0b101, 0b010]),
    ('K', [0b101, 0b101, 0b110, 0b101, 0b101]),
    ('L', [0b100, 0b100, 0b100, 0b100, 0b111]),
    ('M', [0b101, 0b111, 0b111, 0b101, 0b101]),
    ('N', [0b110, 0b101, 0b101, 0b101, 0b101]),
    ('O', [0b010, 0b101, 0b101, 0b101, 0b010]),
    ('P', [0b110, 0b101, 0b110, 0b100, 0b100]),
    ('Q', [0b010, 0b101, 0b101, 0b110, 0b011]),
    ('R', [0b110, 0b101, 0b110, 0b101, 0b101]),
    ('S', [0b011, 0b100, 0b010, 0b001, 0b110]),
    ('T', [0b111, 0b010, 0b010, 0b010, 0b010]),
    ('U', [0b101, 0b101, 0b101, 0b101, 0b111]),
    ('V', [0b101, 0b101, 0b101, 0b101, 0b010]),
    ('W', [0b101, 0b101, 0b111, 0b111, 0b101]),
    ('X', [0b101, 0b101, 0b010, 0b101, 0b101]),
    ('Y', [0b101, 0b101, 0b010, 0b010, 0b010]),
    ('Z', [0b111, 0b001, 0b010, 0b100, 0b111]),
    ('0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', [0b110, 0b001, 0b010, 0b100, 0b111]),
    ('3', [0b110, 0b001, 0b010, 0b001, 0b110]),
    ('4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', [0b111, 0b100, 0b110, 0b001, 0b110]),
    ('6', [0b011, 0b100, 0b111, 0b101, 0b111]),
    ('7', [0b111, 0b001, 0b001, 0b010, 0b010]),
    ('8', [0b111, 0b101, 0b111, 0b101, 0b111]),
    ('9', [0b111, 0b101, 0b111, 0b001, 0b110]),
];

/// Collection of built-in glyphs.
pub struct BuiltinGlyphs;

impl BuiltinGlyphs {
    /// Render one glyph bitmap to a canvas.
    fn render(rows: &[u8; 5]) -> Canvas {
        let mut canvas = Canvas::new(GLYPH_WIDTH, rows.len());
        for (y, bits) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - x)) != 0 {
                    canvas.set_pixel(x as i32, y as i32, GLYPH_INK);
                }
            }
        }
        canvas
    }

    /// Build the glyph sheet, one character per 4-pixel cell.
    pub fn sheet() -> SpriteSheet {
        let sprites = FONT
            .iter()
            .map(|(c, rows)| (c.to_string(), Self::render(rows)))
            .collect();
        SpriteSheet::pack(sprites, GLYPH_WIDTH + 1)
    }

    /// Position of a character in the glyph table, if it has one.
    pub fn index_of(c: char) -> Option<usize> {
        let c = c.to_ascii_uppercase();
        FONT.iter().position(|(g, _)| *g == c)
    }
}
