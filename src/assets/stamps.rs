//! Built-in stamps.
//!
//! Each stamp is a small pixel pattern: hex digits are palette indices,
//! `.` is transparent. Stamps are packed into 16-pixel cells.

use super::SpriteSheet;
use crate::canvas::Canvas;

/// Width of one stamp cell on the sheet.
pub const STAMP_CELL: usize = 16;

const HEART: &[&str] = &[
    ".88...88.",
    "8ee8.8ee8",
    "8e8888888",
    "888888888",
    ".8888888.",
    "..88888..",
    "...888...",
    "....8....",
];

const STAR: &[&str] = &[
    "....a....",
    "....a....",
    "...aaa...",
    "aaaaaaaaa",
    ".aaa9aaa.",
    "..aaaaa..",
    "..aa.aa..",
    ".aa...aa.",
    ".a.....a.",
];

const SMILEY: &[&str] = &[
    "..aaaaaa..",
    ".aaaaaaaa.",
    "aa1aaaa1aa",
    "aa1aaaa1aa",
    "aaaaaaaaaa",
    "a1aaaaaa1a",
    "aa1aaaa1aa",
    ".aa1111aa.",
    "..aaaaaa..",
];

const BUNNY: &[&str] = &[
    "..77...77..",
    "..7e7.7e7..",
    "..7e7.7e7..",
    "..7e7.7e7..",
    "...77777...",
    "..7777777..",
    ".771777177.",
    ".777777777.",
    ".7777e7777.",
    "..7777777..",
    "...77777...",
    "..7777777..",
    ".777777777.",
    "..77...77..",
];

const FLOWER: &[&str] = &[
    "...e.e...",
    "..eeeee..",
    ".eeeaeee.",
    "..eeeee..",
    "...e3e...",
    "....3....",
    "..3.3.3..",
    "...333...",
    "....3....",
];

const MUSHROOM: &[&str] = &[
    "...8888...",
    "..887788..",
    ".88888878.",
    "8878888888",
    "8888887788",
    "..777777..",
    "...7777...",
    "...7777...",
    "...7777...",
    "..777777..",
];

const TREE: &[&str] = &[
    "....b....",
    "...bbb...",
    "..bbbbb..",
    "...bbb...",
    "..bbbbb..",
    ".bbbbbbb.",
    "..bbbbb..",
    ".bbbbbbb.",
    "bbbbbbbbb",
    "....4....",
    "....4....",
    "...444...",
];

const HOUSE: &[&str] = &[
    ".....8.....",
    "....888....",
    "...88888...",
    "..8888888..",
    ".888888888.",
    "88888888888",
    ".777777777.",
    ".7cc777cc7.",
    ".7cc747cc7.",
    ".777747777.",
    ".777747777.",
];

const MOON: &[&str] = &[
    "...aaa..",
    ".aaa....",
    ".aa.....",
    "aa......",
    "aa......",
    "aa......",
    ".aa.....",
    ".aaa....",
    "...aaa..",
];

const SUN: &[&str] = &[
    ".....a.....",
    "..a..a..a..",
    "...a...a...",
    "....999....",
    "aa.99999.aa",
    "...99999...",
    "....999....",
    "...a...a...",
    "..a..a..a..",
    ".....a.....",
];

const FISH: &[&str] = &[
    "....ccc.....",
    "..cccccc..c.",
    ".c1ccccccccc",
    "cccccccccc..",
    ".cccccccccc.",
    "..cccccc..c.",
    "....ccc.....",
];

const CAT: &[&str] = &[
    "d......d..",
    "dd....dd..",
    "dddddddd..",
    "d1dddd1d..",
    "dddeeddd..",
    ".dddddd..d",
    ".dddddd.d.",
    ".dddddddd.",
    ".dd..dd...",
];

const NOTE: &[&str] = &[
    "...1111.",
    "...1..1.",
    "...1..1.",
    "...1..1.",
    "...1..1.",
    ".111.11.",
    "1111111.",
    ".11.111.",
];

const CHECKER: &[&str] = &[
    "7.7.7.7.",
    ".7.7.7.7",
    "7.7.7.7.",
    ".7.7.7.7",
    "7.7.7.7.",
    ".7.7.7.7",
    "7.7.7.7.",
    ".7.7.7.7",
];

/// Collection of built-in stamps.
pub struct BuiltinStamps;

impl BuiltinStamps {
    /// Names and patterns of every built-in stamp, in toolbar order.
    pub fn patterns() -> [(&'static str, &'static [&'static str]); 14] {
        [
            ("heart", HEART),
            ("star", STAR),
            ("smiley", SMILEY),
            ("bunny", BUNNY),
            ("flower", FLOWER),
            ("mushroom", MUSHROOM),
            ("tree", TREE),
            ("house", HOUSE),
            ("moon", MOON),
            ("sun", SUN),
            ("fish", FISH),
            ("cat", CAT),
            ("note", NOTE),
            ("checker", CHECKER),
        ]
    }

    /// Build the stamp sheet.
    pub fn sheet() -> SpriteSheet {
        let sprites = Self::patterns()
            .into_iter()
            .map(|(name, rows)| (name.to_string(), Canvas::from_pattern(rows)))
            .collect();
        SpriteSheet::pack(sprites, STAMP_CELL)
    }
}
