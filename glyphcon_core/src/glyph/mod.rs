//! Bitmap glyphs: the static 6x8 font, lookup, and the packed form the
//! glyph shader consumes.
//!
//! A glyph is 48 bits of pixel data. The shader can't take six independent
//! bytes in one attribute, so each glyph travels as two 3-component
//! attributes (see [`PackedGlyph`]).

mod packed;
mod table;

pub use packed::{ByteTriple, PackedGlyph, decode, encode};
pub use table::GLYPH_COUNT;

use table::FONT_6X8;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 6;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// Code point of the first table entry (space).
pub const FIRST_CODE_POINT: i64 = 32;

/// Bytes of bitmap data per glyph.
pub const GLYPH_BYTES: usize = 6;

/// One 6x8 character bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph([u8; GLYPH_BYTES]);

impl Glyph {
    /// No pixels set. Encodes to all-zero triples.
    pub const BLANK: Self = Self([0; GLYPH_BYTES]);

    pub const fn from_bytes(bytes: [u8; GLYPH_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(self) -> [u8; GLYPH_BYTES] {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == [0; GLYPH_BYTES]
    }

    /// Whether the pixel at `(row, col)` is lit. Out-of-cell positions are
    /// never lit.
    pub fn pixel(self, row: usize, col: usize) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        let idx = row * GLYPH_WIDTH + col;
        (self.0[idx / 8] >> (7 - idx % 8)) & 1 == 1
    }

    /// The full bitmap, `[row][col]`, row 0 at the top.
    pub fn bitmap(self) -> [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        let mut out = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, px) in line.iter_mut().enumerate() {
                *px = self.pixel(row, col);
            }
        }
        out
    }

    /// Build a glyph from a bitmap. Inverse of [`Glyph::bitmap`].
    pub fn from_bitmap(bitmap: &[[bool; GLYPH_WIDTH]; GLYPH_HEIGHT]) -> Self {
        let mut bytes = [0u8; GLYPH_BYTES];
        for (row, line) in bitmap.iter().enumerate() {
            for (col, &lit) in line.iter().enumerate() {
                if lit {
                    let idx = row * GLYPH_WIDTH + col;
                    bytes[idx / 8] |= 1 << (7 - idx % 8);
                }
            }
        }
        Self(bytes)
    }
}

/// Glyph for an arbitrary code point.
///
/// The table index is `code_point - 32` clamped to the table bounds: control
/// characters and anything negative map to the space glyph, everything past
/// `'~'` maps to the last entry. Never fails.
pub fn lookup(code_point: i64) -> Glyph {
    let idx = code_point
        .saturating_sub(FIRST_CODE_POINT)
        .clamp(0, GLYPH_COUNT as i64 - 1) as usize;
    Glyph(FONT_6X8[idx])
}

/// Glyph for a character (see [`lookup`]).
pub fn glyph_for(c: char) -> Glyph {
    lookup(i64::from(u32::from(c)))
}
