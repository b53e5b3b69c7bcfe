//! The 6x8 ASCII bitmap font.
//!
//! One entry per printable code point, `' '` (0x20) through `'~'` (0x7E).
//! Each entry is 48 bits: 8 rows of 6 pixels, row-major, most significant
//! bit first, so bit `7 - (i % 8)` of byte `i / 8` is pixel `i = row * 6 + col`.

/// Number of glyphs in the font table.
pub const GLYPH_COUNT: usize = 95;

// Extracted from the piclist 6x8 charset.
#[rustfmt::skip]
pub(super) const FONT_6X8: [[u8; 6]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 20 space
    [0x10, 0xE3, 0x84, 0x10, 0x01, 0x00], // 21 !
    [0x6D, 0xB4, 0x80, 0x00, 0x00, 0x00], // 22 "
    [0x00, 0xA7, 0xCA, 0x29, 0xF2, 0x80], // 23 #
    [0x20, 0xE4, 0x0C, 0x09, 0xC1, 0x00], // 24 $
    [0x65, 0x90, 0x84, 0x21, 0x34, 0xC0], // 25 %
    [0x21, 0x45, 0x08, 0x55, 0x23, 0x40], // 26 &
    [0x30, 0xC2, 0x00, 0x00, 0x00, 0x00], // 27 '
    [0x10, 0x82, 0x08, 0x20, 0x81, 0x00], // 28 (
    [0x20, 0x41, 0x04, 0x10, 0x42, 0x00], // 29 )
    [0x00, 0xA3, 0x9F, 0x38, 0xA0, 0x00], // 2A *
    [0x00, 0x41, 0x1F, 0x10, 0x40, 0x00], // 2B +
    [0x00, 0x00, 0x00, 0x00, 0xC3, 0x08], // 2C ,
    [0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // 2D -
    [0x00, 0x00, 0x00, 0x00, 0xC3, 0x00], // 2E .
    [0x00, 0x10, 0x84, 0x21, 0x00, 0x00], // 2F /
    [0x39, 0x14, 0xD5, 0x65, 0x13, 0x80], // 30 0
    [0x10, 0xC1, 0x04, 0x10, 0x43, 0x80], // 31 1
    [0x39, 0x10, 0x46, 0x21, 0x07, 0xC0], // 32 2
    [0x39, 0x10, 0x4E, 0x05, 0x13, 0x80], // 33 3
    [0x08, 0x62, 0x92, 0x7C, 0x20, 0x80], // 34 4
    [0x7D, 0x04, 0x1E, 0x05, 0x13, 0x80], // 35 5
    [0x18, 0x84, 0x1E, 0x45, 0x13, 0x80], // 36 6
    [0x7C, 0x10, 0x84, 0x20, 0x82, 0x00], // 37 7
    [0x39, 0x14, 0x4E, 0x45, 0x13, 0x80], // 38 8
    [0x39, 0x14, 0x4F, 0x04, 0x23, 0x00], // 39 9
    [0x00, 0x03, 0x0C, 0x00, 0xC3, 0x00], // 3A :
    [0x00, 0x03, 0x0C, 0x00, 0xC3, 0x08], // 3B ;
    [0x08, 0x42, 0x10, 0x20, 0x40, 0x80], // 3C <
    [0x00, 0x07, 0xC0, 0x01, 0xF0, 0x00], // 3D =
    [0x20, 0x40, 0x81, 0x08, 0x42, 0x00], // 3E >
    [0x39, 0x10, 0x46, 0x10, 0x01, 0x00], // 3F ?
    [0x39, 0x15, 0xD5, 0x5D, 0x03, 0x80], // 40 @
    [0x39, 0x14, 0x51, 0x7D, 0x14, 0x40], // 41 A
    [0x79, 0x14, 0x5E, 0x45, 0x17, 0x80], // 42 B
    [0x39, 0x14, 0x10, 0x41, 0x13, 0x80], // 43 C
    [0x79, 0x14, 0x51, 0x45, 0x17, 0x80], // 44 D
    [0x7D, 0x04, 0x1E, 0x41, 0x07, 0xC0], // 45 E
    [0x7D, 0x04, 0x1E, 0x41, 0x04, 0x00], // 46 F
    [0x39, 0x14, 0x17, 0x45, 0x13, 0xC0], // 47 G
    [0x45, 0x14, 0x5F, 0x45, 0x14, 0x40], // 48 H
    [0x38, 0x41, 0x04, 0x10, 0x43, 0x80], // 49 I
    [0x04, 0x10, 0x41, 0x45, 0x13, 0x80], // 4A J
    [0x45, 0x25, 0x18, 0x51, 0x24, 0x40], // 4B K
    [0x41, 0x04, 0x10, 0x41, 0x07, 0xC0], // 4C L
    [0x45, 0xB5, 0x51, 0x45, 0x14, 0x40], // 4D M
    [0x45, 0x95, 0x53, 0x45, 0x14, 0x40], // 4E N
    [0x39, 0x14, 0x51, 0x45, 0x13, 0x80], // 4F O
    [0x79, 0x14, 0x5E, 0x41, 0x04, 0x00], // 50 P
    [0x39, 0x14, 0x51, 0x55, 0x23, 0x40], // 51 Q
    [0x79, 0x14, 0x5E, 0x49, 0x14, 0x40], // 52 R
    [0x39, 0x14, 0x0E, 0x05, 0x13, 0x80], // 53 S
    [0x7C, 0x41, 0x04, 0x10, 0x41, 0x00], // 54 T
    [0x45, 0x14, 0x51, 0x45, 0x13, 0x80], // 55 U
    [0x45, 0x14, 0x51, 0x44, 0xA1, 0x00], // 56 V
    [0x45, 0x15, 0x55, 0x55, 0x52, 0x80], // 57 W
    [0x45, 0x12, 0x84, 0x29, 0x14, 0x40], // 58 X
    [0x45, 0x14, 0x4A, 0x10, 0x41, 0x00], // 59 Y
    [0x78, 0x21, 0x08, 0x41, 0x07, 0x80], // 5A Z
    [0x38, 0x82, 0x08, 0x20, 0x83, 0x80], // 5B [
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // 5C \
    [0x38, 0x20, 0x82, 0x08, 0x23, 0x80], // 5D ]
    [0x10, 0xA4, 0x40, 0x00, 0x00, 0x00], // 5E ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3F], // 5F _
    [0x30, 0xC1, 0x00, 0x00, 0x00, 0x00], // 60 `
    [0x00, 0x03, 0x81, 0x3D, 0x13, 0xC0], // 61 a
    [0x41, 0x07, 0x91, 0x45, 0x17, 0x80], // 62 b
    [0x00, 0x03, 0x91, 0x41, 0x13, 0x80], // 63 c
    [0x04, 0x13, 0xD1, 0x45, 0x13, 0xC0], // 64 d
    [0x00, 0x03, 0x91, 0x79, 0x03, 0x80], // 65 e
    [0x18, 0x82, 0x1E, 0x20, 0x82, 0x00], // 66 f
    [0x00, 0x03, 0xD1, 0x44, 0xF0, 0x4E], // 67 g
    [0x41, 0x07, 0x12, 0x49, 0x24, 0x80], // 68 h
    [0x10, 0x01, 0x04, 0x10, 0x41, 0x80], // 69 i
    [0x08, 0x01, 0x82, 0x08, 0x24, 0x8C], // 6A j
    [0x41, 0x04, 0x94, 0x61, 0x44, 0x80], // 6B k
    [0x10, 0x41, 0x04, 0x10, 0x41, 0x80], // 6C l
    [0x00, 0x06, 0x95, 0x55, 0x14, 0x40], // 6D m
    [0x00, 0x07, 0x12, 0x49, 0x24, 0x80], // 6E n
    [0x00, 0x03, 0x91, 0x45, 0x13, 0x80], // 6F o
    [0x00, 0x07, 0x91, 0x45, 0x17, 0x90], // 70 p
    [0x00, 0x03, 0xD1, 0x45, 0x13, 0xC1], // 71 q
    [0x00, 0x05, 0x89, 0x20, 0x87, 0x00], // 72 r
    [0x00, 0x03, 0x90, 0x38, 0x13, 0x80], // 73 s
    [0x00, 0x87, 0x88, 0x20, 0xA1, 0x00], // 74 t
    [0x00, 0x04, 0x92, 0x49, 0x62, 0x80], // 75 u
    [0x00, 0x04, 0x51, 0x44, 0xA1, 0x00], // 76 v
    [0x00, 0x04, 0x51, 0x55, 0xF2, 0x80], // 77 w
    [0x00, 0x04, 0x92, 0x31, 0x24, 0x80], // 78 x
    [0x00, 0x04, 0x92, 0x48, 0xE1, 0x18], // 79 y
    [0x00, 0x07, 0x82, 0x31, 0x07, 0x80], // 7A z
    [0x18, 0x82, 0x18, 0x20, 0x81, 0x80], // 7B {
    [0x10, 0x41, 0x00, 0x10, 0x41, 0x00], // 7C |
    [0x30, 0x20, 0x83, 0x08, 0x23, 0x00], // 7D }
    [0x29, 0x40, 0x00, 0x00, 0x00, 0x00], // 7E ~
];
