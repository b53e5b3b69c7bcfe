//! Software rasterizer for glyph batches.
//!
//! Follows the fragment shader step for step: each sprite pixel is sampled at
//! its centre, mapped to an 8×8 point coordinate, and either discarded or
//! blended over the destination with `src_alpha, one_minus_src_alpha`.
//! Outlines are stroked one pixel wide, each covered pixel blended once.

use std::collections::BTreeSet;
use std::convert::Infallible;

use super::{GlyphBatch, GlyphSink};
use crate::color::Rgba;
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, PackedGlyph};

/// Sprite cells per axis in point-coordinate space.
const SPRITE_CELLS: f32 = 8.0;

/// An RGBA target with a y-down pixel grid, initially fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Whether no pixel has any coverage.
    pub fn is_transparent(&self) -> bool {
        self.pixels.iter().all(|p| p.alpha() == 0.0)
    }

    /// Count of pixels with non-zero alpha.
    pub fn painted(&self) -> usize {
        self.pixels.iter().filter(|p| p.alpha() > 0.0).count()
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn blend(&mut self, x: usize, y: usize, src: Rgba) {
        let dst = &mut self.pixels[y * self.width + x];
        let sa = src.alpha();
        let inv = 1.0 - sa;
        let [dr, dg, db, da] = dst.0;
        *dst = Rgba([
            src.red() * sa + dr * inv,
            src.green() * sa + dg * inv,
            src.blue() * sa + db * inv,
            sa + da * inv,
        ]);
    }

    fn draw_sprite(&mut self, center: [f32; 2], extent: [f32; 2], cell: PackedGlyph, color: Rgba) {
        let left = center[0] - extent[0] / 2.0;
        let top = center[1] - extent[1] / 2.0;
        let x0 = left.floor().max(0.0) as usize;
        let y0 = top.floor().max(0.0) as usize;
        let x1 = ((left + extent[0]).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((top + extent[1]).ceil().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let v = (y as f32 + 0.5 - top) / extent[1];
            if !(0.0..1.0).contains(&v) {
                continue;
            }
            let row = (v * SPRITE_CELLS) as usize;
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - left) / extent[0];
                if !(0.0..1.0).contains(&u) {
                    continue;
                }
                let col = (u * SPRITE_CELLS) as usize;
                if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT || !cell.pixel(row, col) {
                    continue;
                }
                self.blend(x, y, color);
            }
        }
    }
}

impl Canvas {
    /// Pixel containing `p`. A point on the far edge of the canvas lands on
    /// the last pixel, so a box filling the canvas keeps its right and
    /// bottom border.
    fn pixel_at(&self, p: [f32; 2]) -> Option<(usize, usize)> {
        Some((edge_pixel(p[0], self.width)?, edge_pixel(p[1], self.height)?))
    }

    /// Add every pixel the segment `from -> to` passes through, as `(y, x)`.
    fn trace_segment(&self, from: [f32; 2], to: [f32; 2], covered: &mut BTreeSet<(usize, usize)>) {
        let d = [to[0] - from[0], to[1] - from[1]];
        let steps = d[0].abs().max(d[1].abs()).ceil();
        if !steps.is_finite() {
            return;
        }
        let steps = steps as usize;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            if let Some((x, y)) = self.pixel_at([from[0] + d[0] * t, from[1] + d[1] * t]) {
                covered.insert((y, x));
            }
        }
    }
}

fn edge_pixel(v: f32, len: usize) -> Option<usize> {
    if len == 0 || !(0.0..=len as f32).contains(&v) {
        return None;
    }
    Some((v.floor() as usize).min(len - 1))
}

impl GlyphSink for Canvas {
    type Error = Infallible;

    fn draw_glyphs(&mut self, batch: &GlyphBatch<'_>) -> Result<(), Self::Error> {
        let extent = batch.transform.sprite_extent(batch.scale);
        if extent[0] <= 0.0 || extent[1] <= 0.0 {
            return Ok(());
        }
        for (position, cell) in batch.cells() {
            if cell.is_empty() {
                continue;
            }
            let center = batch.transform.map(position, batch.scale);
            self.draw_sprite(center, extent, cell, batch.color);
        }
        Ok(())
    }

    fn draw_outline(&mut self, points: &[[f32; 2]], color: Rgba) -> Result<(), Self::Error> {
        if color.alpha() <= 0.0 {
            return Ok(());
        }
        let mut covered = BTreeSet::new();
        for pair in points.windows(2) {
            self.trace_segment(pair[0], pair[1], &mut covered);
        }
        for (y, x) in covered {
            self.blend(x, y, color);
        }
        Ok(())
    }
}
