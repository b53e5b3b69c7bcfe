//! The draw seam between a console and whatever puts pixels on screen.
//!
//! A [`Console`](crate::console::Console) never talks to a graphics API. Each
//! frame it hands a [`GlyphBatch`] to a [`GlyphSink`]: the wgpu renderer in
//! the app crate, or the software [`Canvas`] used by tests and headless runs.
//! Both decode cells with the bit layout of
//! [`PackedGlyph::pixel`](crate::glyph::PackedGlyph::pixel). Box borders
//! reach the same sinks as one-pixel polylines.

mod canvas;

use bitflags::bitflags;

pub use canvas::Canvas;

use crate::color::Rgba;
use crate::glyph::PackedGlyph;
use crate::scroll::TRIPLE;

/// Edge length of a glyph sprite in unscaled glyph pixels.
pub const POINT_SIZE: f32 = 8.0;

bitflags! {
    /// What changed since the sink last presented a batch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Damage: u8 {
        /// Plane bytes changed (write, clear, resize).
        const CELLS    = 1 << 0;
        /// Grid shape, cell positions, scale or transform changed.
        const GEOMETRY = 1 << 1;
        /// Text color changed.
        const STYLE    = 1 << 2;
    }
}

/// Maps y-up cell offsets into the sink's target space.
///
/// A cell at `position` drawn with magnification `scale` is centred at
/// `origin + position * px_scale * scale`, and its sprite spans
/// `POINT_SIZE * scale * |px_scale|` target units on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub origin: [f32; 2],
    pub px_scale: [f32; 2],
}

impl Transform2D {
    /// Target is a y-down pixel grid with the viewport's top-left corner at
    /// `(x, y)`.
    pub const fn pixels(x: f32, y: f32) -> Self {
        Self {
            origin: [x, y],
            px_scale: [1.0, -1.0],
        }
    }

    /// Target is clip space of a `width × height` pixel surface, with the
    /// viewport's top-left corner at pixel `(x, y)`.
    pub fn ndc(x: f32, y: f32, width: f32, height: f32) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        Self {
            origin: [2.0 * x / width - 1.0, 1.0 - 2.0 * y / height],
            px_scale: [2.0 / width, 2.0 / height],
        }
    }

    /// Sprite centre for a cell position.
    pub fn map(&self, position: [f32; 2], scale: u32) -> [f32; 2] {
        let s = scale as f32;
        [
            self.origin[0] + position[0] * self.px_scale[0] * s,
            self.origin[1] + position[1] * self.px_scale[1] * s,
        ]
    }

    /// Sprite width and height in target units.
    pub fn sprite_extent(&self, scale: u32) -> [f32; 2] {
        let edge = POINT_SIZE * scale as f32;
        [edge * self.px_scale[0].abs(), edge * self.px_scale[1].abs()]
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::pixels(0.0, 0.0)
    }
}

/// Everything a sink needs to draw one console for one frame.
///
/// `positions`, `bytes_012` and `bytes_345` are parallel: cell `i` sits at
/// `positions[i]` and its triples are at `3 * i` in each plane.
#[derive(Debug, Clone, Copy)]
pub struct GlyphBatch<'a> {
    pub positions: &'a [[f32; 2]],
    pub bytes_012: &'a [u8],
    pub bytes_345: &'a [u8],
    pub color: Rgba,
    pub scale: u32,
    pub transform: Transform2D,
    pub damage: Damage,
}

impl GlyphBatch<'_> {
    /// Number of cells in the batch.
    pub fn len(&self) -> usize {
        self.positions
            .len()
            .min(self.bytes_012.len() / TRIPLE)
            .min(self.bytes_345.len() / TRIPLE)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Packed bytes of cell `index`, or `None` past the end.
    pub fn cell(&self, index: usize) -> Option<PackedGlyph> {
        if index >= self.len() {
            return None;
        }
        let at = index * TRIPLE;
        let mut cell = PackedGlyph::EMPTY;
        cell.bytes_012.copy_from_slice(self.bytes_012.get(at..at + TRIPLE)?);
        cell.bytes_345.copy_from_slice(self.bytes_345.get(at..at + TRIPLE)?);
        Some(cell)
    }

    /// `(position, cell)` pairs in plane order.
    pub fn cells(&self) -> impl Iterator<Item = ([f32; 2], PackedGlyph)> + '_ {
        (0..self.len()).filter_map(|i| Some((self.positions[i], self.cell(i)?)))
    }
}

/// Receives console batches and draws them.
pub trait GlyphSink {
    type Error;

    /// Composite every set glyph pixel of `batch` over the current target.
    fn draw_glyphs(&mut self, batch: &GlyphBatch<'_>) -> Result<(), Self::Error>;

    /// Stroke the polyline through `points`, one pixel wide, in `color`.
    /// Points are y-down window pixels, the space box outlines live in.
    fn draw_outline(&mut self, points: &[[f32; 2]], color: Rgba) -> Result<(), Self::Error>;
}

impl<S: GlyphSink + ?Sized> GlyphSink for &mut S {
    type Error = S::Error;

    fn draw_glyphs(&mut self, batch: &GlyphBatch<'_>) -> Result<(), Self::Error> {
        (**self).draw_glyphs(batch)
    }

    fn draw_outline(&mut self, points: &[[f32; 2]], color: Rgba) -> Result<(), Self::Error> {
        (**self).draw_outline(points, color)
    }
}
