//! The text console widget.
//!
//! A `Console` owns a [`ScrollBuffer`] sized to its viewport, the per-cell
//! sprite positions matching the buffer's planes, and the style used to draw
//! them. It never touches a graphics API: [`Console::draw`] hands one
//! [`GlyphBatch`] to a [`GlyphSink`].
//!
//! Cell offsets are y-up, relative to the viewport's top-left corner, in
//! unscaled glyph pixels. Row 0 of the planes is the bottom row, so the
//! grid hangs from the top edge regardless of orientation.

use log::debug;

use crate::color::Rgba;
use crate::error::ConsoleError;
use crate::layout::{Rect, Widget};
use crate::render::{Damage, GlyphBatch, GlyphSink, Transform2D};
use crate::scroll::{LineHistory, Orientation, ScrollBuffer};

/// Horizontal advance per cell, in unscaled pixels.
pub const CELL_WIDTH: usize = 6;

/// Vertical advance per cell: 8 glyph rows plus 2 rows of leading.
pub const CELL_HEIGHT: usize = 10;

/// Offset from a cell's corner to its sprite centre.
const SPRITE_OFFSET: f32 = 4.0;

pub const DEFAULT_FONT_SCALE: u32 = 12;

/// Construction-time appearance of a console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleSettings {
    pub text_color: Rgba,
    pub font_scale: u32,
    pub orientation: Orientation,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            text_color: Rgba::BLACK,
            font_scale: DEFAULT_FONT_SCALE,
            orientation: Orientation::ScrollUp,
        }
    }
}

/// Grid shape that fits `size` pixels at magnification `scale`.
///
/// Always at least 1×1; negative, NaN or infinite sizes count as empty.
pub fn grid_shape(size: [f32; 2], scale: u32) -> (usize, usize) {
    let scale = scale.max(1) as f32;
    let fit = |extent: f32, cell: usize| -> usize {
        let n = (extent / (cell as f32 * scale)).floor();
        if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
    };
    (fit(size[1], CELL_HEIGHT), fit(size[0], CELL_WIDTH))
}

/// Sprite centres for a `rows × cols` grid, in plane order.
pub fn cell_positions(rows: usize, cols: usize) -> Vec<[f32; 2]> {
    let (cw, ch) = (CELL_WIDTH as f32, CELL_HEIGHT as f32);
    let top = -ch * rows as f32;
    let mut positions = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let y = SPRITE_OFFSET + top + ch * row as f32;
        for col in 0..cols {
            positions.push([SPRITE_OFFSET + cw * col as f32, y]);
        }
    }
    positions
}

/// Integer magnification from a host-supplied value: floored, at least 1.
fn sanitize_scale(scale: f32) -> u32 {
    if scale.is_nan() || scale < 1.0 {
        1
    } else {
        scale.floor() as u32
    }
}

/// A scrolling text console drawn with packed glyph sprites.
#[derive(Debug, Clone)]
pub struct Console {
    buffer: ScrollBuffer,
    positions: Vec<[f32; 2]>,
    rect: Rect,
    text_color: Rgba,
    font_scale: u32,
    transform: Transform2D,
    damage: Damage,
}

impl Console {
    /// A 1×1 console. The host sizes it with [`Widget::set_size`].
    pub fn new(settings: ConsoleSettings) -> Self {
        let font_scale = settings.font_scale.max(1);
        let rect = Rect::new([0.0, 0.0], [1.0, 1.0]);
        let (rows, cols) = grid_shape(rect.size, font_scale);
        Self {
            buffer: ScrollBuffer::new(rows, cols, settings.orientation),
            positions: cell_positions(rows, cols),
            rect,
            text_color: settings.text_color,
            font_scale,
            transform: Transform2D::default(),
            damage: Damage::all(),
        }
    }

    pub fn rows(&self) -> usize {
        self.buffer.rows()
    }

    pub fn cols(&self) -> usize {
        self.buffer.cols()
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &LineHistory {
        self.buffer.history()
    }

    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Rgba) {
        if color != self.text_color {
            self.text_color = color;
            self.damage |= Damage::STYLE;
        }
    }

    pub fn font_scale(&self) -> u32 {
        self.font_scale
    }

    /// Set the magnification. Fractions are floored and anything below 1
    /// becomes 1; the grid is recomputed for the current size.
    pub fn set_font_scale(&mut self, scale: f32) {
        let scale = sanitize_scale(scale);
        if scale != self.font_scale {
            self.font_scale = scale;
            self.regrid();
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.buffer.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.orientation() {
            self.buffer.set_orientation(orientation);
            self.damage |= Damage::CELLS;
        }
    }

    /// Apply color, scale and orientation in one go.
    pub fn apply_settings(&mut self, settings: ConsoleSettings) {
        self.set_text_color(settings.text_color);
        self.set_font_scale(settings.font_scale as f32);
        self.set_orientation(settings.orientation);
    }

    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Host mapping from cell offsets to the sink's target space.
    pub fn set_transform(&mut self, transform: Transform2D) {
        if transform != self.transform {
            self.transform = transform;
            self.damage |= Damage::GEOMETRY;
        }
    }

    /// Append text. Returns the number of lines added.
    pub fn write(&mut self, text: &str, wrap: bool) -> usize {
        self.damage |= Damage::CELLS;
        self.buffer.write(text, wrap)
    }

    /// Append raw bytes, which must be UTF-8. Nothing changes on error.
    pub fn write_bytes(&mut self, bytes: &[u8], wrap: bool) -> Result<usize, ConsoleError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ConsoleError::InvalidArgument(format!("console text is not UTF-8: {e}")))?;
        Ok(self.write(text, wrap))
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.damage |= Damage::CELLS;
    }

    /// What changed since the last [`mark_presented`](Self::mark_presented).
    pub fn damage(&self) -> Damage {
        self.damage
    }

    /// The sink has shown the current state.
    pub fn mark_presented(&mut self) {
        self.damage = Damage::empty();
    }

    /// Hand the current frame to `sink`. The console is not modified.
    pub fn draw<S: GlyphSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        let batch = GlyphBatch {
            positions: &self.positions,
            bytes_012: self.buffer.bytes_012(),
            bytes_345: self.buffer.bytes_345(),
            color: self.text_color,
            scale: self.font_scale,
            transform: self.transform,
            damage: self.damage,
        };
        sink.draw_glyphs(&batch)
    }

    fn regrid(&mut self) {
        let (rows, cols) = grid_shape(self.rect.size, self.font_scale);
        debug!(
            "console regrid: {:?} at scale {} -> {rows}x{cols}",
            self.rect.size, self.font_scale
        );
        if (rows, cols) != (self.rows(), self.cols()) || self.positions.len() != rows * cols {
            self.positions = cell_positions(rows, cols);
            self.buffer.resize(rows, cols);
            self.damage |= Damage::CELLS;
        }
        self.damage |= Damage::GEOMETRY;
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(ConsoleSettings::default())
    }
}

impl Widget for Console {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_pos(&mut self, pos: [f32; 2]) {
        if pos != self.rect.pos {
            self.rect.pos = pos;
            self.damage |= Damage::GEOMETRY;
        }
    }

    fn set_size(&mut self, size: [f32; 2]) {
        self.rect.size = size;
        self.regrid();
    }
}

#[cfg(test)]
mod tests;
