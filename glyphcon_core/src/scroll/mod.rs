//! The console's scroll buffer: line history plus the byte planes the glyph
//! shader reads, kept in step across writes, clears and resizes.
//!
//! Plane rows count from the bottom of the viewport: row 0 is the bottom
//! row, `rows - 1` the top. The cursor starts just below row 0 and moves one
//! row per written line:
//!
//! - `ScrollUp` moves down, so every line runs off row 0: the planes shift
//!   up a row and the new line lands at the bottom, like a terminal. The
//!   newest line is always row 0.
//! - `ScrollDown` moves up from row 0. Once it would pass the top row the
//!   planes shift down and the new line lands on top.

mod history;
mod planes;

use std::fmt;
use std::str::FromStr;

use log::trace;

pub use history::LineHistory;
pub use planes::{CellPlanes, TRIPLE};

use crate::error::ConsoleError;
use crate::glyph::{PackedGlyph, encode, glyph_for};
use crate::text;

/// Cursor position before the first line, for both orientations.
const START_CURSOR: isize = -1;

/// Direction new lines travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Newest line at the bottom; older lines scroll up.
    #[default]
    ScrollUp,
    /// Newest line at the top; older lines scroll down.
    ScrollDown,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll-up" => Ok(Self::ScrollUp),
            "scroll-down" => Ok(Self::ScrollDown),
            other => Err(ConsoleError::Configuration(format!(
                "orientation must be \"scroll-up\" or \"scroll-down\", got {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-capacity text grid backed by two GPU-facing byte planes.
#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    orientation: Orientation,
    planes: CellPlanes,
    history: LineHistory,
    /// Row of the most recent line; starts just below row 0.
    cursor: isize,
}

impl ScrollBuffer {
    /// Empty buffer. Zero dimensions are treated as 1.
    pub fn new(rows: usize, cols: usize, orientation: Orientation) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            orientation,
            planes: CellPlanes::new(rows, cols),
            history: LineHistory::new(rows),
            cursor: START_CURSOR,
        }
    }

    pub fn rows(&self) -> usize {
        self.planes.rows()
    }

    pub fn cols(&self) -> usize {
        self.planes.cols()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn history(&self) -> &LineHistory {
        &self.history
    }

    pub fn planes(&self) -> &CellPlanes {
        &self.planes
    }

    pub fn bytes_012(&self) -> &[u8] {
        self.planes.bytes_012()
    }

    pub fn bytes_345(&self) -> &[u8] {
        self.planes.bytes_345()
    }

    /// Packed glyph at `(row, col)`; row 0 is the bottom of the viewport.
    pub fn cell(&self, row: usize, col: usize) -> Option<PackedGlyph> {
        self.planes.cell(row, col)
    }

    /// Row holding the most recent line, if anything has been written.
    pub fn cursor_row(&self) -> Option<usize> {
        usize::try_from(self.cursor).ok().filter(|&r| r < self.rows())
    }

    /// Reallocate for a new grid shape and replay history into it.
    ///
    /// Up to `rows` of the most recent lines are placed again, oldest first,
    /// so the result matches having written them into a fresh grid of this
    /// shape. History itself is not truncated.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let rows = rows.max(1);
        let cols = cols.max(1);
        trace!("scroll buffer resize {}x{} -> {rows}x{cols}", self.rows(), self.cols());

        self.planes = CellPlanes::new(rows, cols);
        self.history.set_capacity(rows);
        self.cursor = START_CURSOR;

        let history = std::mem::take(&mut self.history);
        for line in history.recent_oldest_first(rows) {
            self.place_line(line);
        }
        self.history = history;
    }

    /// Switch scroll direction, re-laying out the retained history.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            return;
        }
        self.orientation = orientation;
        self.resize(self.rows(), self.cols());
    }

    /// Blank every cell and forget all history.
    pub fn clear(&mut self) {
        self.planes.fill_zero();
        self.history.clear();
        self.cursor = START_CURSOR;
    }

    /// Write text, scrolling as needed. Returns the number of lines added.
    ///
    /// The text is sanitized to printable ASCII, capped to the last
    /// `rows * cols` characters, then split into lines (see
    /// [`text::layout_lines`]). Empty text adds one blank line.
    pub fn write(&mut self, text: &str, wrap: bool) -> usize {
        let (rows, cols) = (self.rows(), self.cols());
        let clean = text::sanitize(text);
        let capped = text::cap_tail(&clean, rows * cols);
        let lines = text::layout_lines(capped, cols, wrap);
        let count = lines.len();
        for line in lines {
            self.place_line(&line);
            self.history.push(line);
        }
        trace!("scroll buffer wrote {count} line(s), cursor={}", self.cursor);
        count
    }

    /// Advance the cursor for one new line, scrolling the planes if it runs
    /// off either end, and draw the line into the cursor row.
    fn place_line(&mut self, line: &str) {
        let last = self.rows() as isize - 1;
        self.cursor += match self.orientation {
            Orientation::ScrollDown => 1,
            Orientation::ScrollUp => -1,
        };
        if self.cursor > last {
            self.planes.shift_toward_start();
            self.cursor = last;
        } else if self.cursor < 0 {
            self.planes.shift_toward_end();
            self.cursor = 0;
        }
        self.insert_row(line, self.cursor as usize);
    }

    /// Encode `line` into plane row `row`, blanking whatever was there.
    ///
    /// Characters beyond the grid width are dropped. This bypasses history,
    /// which is why it is not public.
    pub(crate) fn insert_row(&mut self, line: &str, row: usize) {
        self.planes.clear_row(row);
        for (col, ch) in line.chars().take(self.cols()).enumerate() {
            self.planes.set_cell(row, col, encode(glyph_for(ch)));
        }
    }
}


#[cfg(test)]
mod tests;
