//! Two-triple packing of glyph bitmaps, and the matching decode.
//!
//! `PackedGlyph::pixel` is the CPU statement of what the fragment shader does per
//! pixel. The WGSL in the app crate and the software canvas must agree with
//! it bit for bit, otherwise glyphs come out garbled.

use super::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph};

/// Three bytes of glyph data, one shader attribute.
pub type ByteTriple = [u8; 3];

/// A glyph split into the two attributes uploaded per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedGlyph {
    /// Bytes 0, 1, 2 (pixels 0..24).
    pub bytes_012: ByteTriple,
    /// Bytes 3, 4, 5 (pixels 24..48).
    pub bytes_345: ByteTriple,
}

impl PackedGlyph {
    /// An empty cell.
    pub const EMPTY: Self = Self {
        bytes_012: [0; 3],
        bytes_345: [0; 3],
    };

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Byte `n` of the six, selected across the two triples.
    pub fn byte(self, n: usize) -> u8 {
        match n {
            0..=2 => self.bytes_012[n],
            3..=5 => self.bytes_345[n - 3],
            _ => 0,
        }
    }

    /// Shader decode of one pixel.
    ///
    /// `idx = row * 6 + col`, source byte `idx / 8`, bit `7 - idx % 8`.
    /// Anything outside the 6x8 cell is unlit (the point sprite is 8x8, so
    /// columns 6 and 7 always land here).
    pub fn pixel(self, row: usize, col: usize) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        let idx = row * GLYPH_WIDTH + col;
        (self.byte(idx / 8) >> (7 - idx % 8)) & 1 == 1
    }
}

/// Split a glyph into its two triples.
pub fn encode(glyph: Glyph) -> PackedGlyph {
    let [b0, b1, b2, b3, b4, b5] = glyph.bytes();
    PackedGlyph {
        bytes_012: [b0, b1, b2],
        bytes_345: [b3, b4, b5],
    }
}

/// Rebuild a glyph by decoding every pixel of a packed cell.
///
/// Goes through [`PackedGlyph::pixel`] rather than copying bytes back, so a
/// round trip exercises the same arithmetic the renderer uses.
pub fn decode(packed: PackedGlyph) -> Glyph {
    let mut bitmap = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
    for (row, line) in bitmap.iter_mut().enumerate() {
        for (col, px) in line.iter_mut().enumerate() {
            *px = packed.pixel(row, col);
        }
    }
    Glyph::from_bitmap(&bitmap)
}
