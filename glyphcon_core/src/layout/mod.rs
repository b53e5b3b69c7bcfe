//! Rectangles, the widget geometry trait and the `BoxWidget` container.
//!
//! Coordinates are y-down pixels in the host's window space: `pos` is the
//! top-left corner, `size` the extent.

mod container;

use std::sync::atomic::{AtomicU64, Ordering};

pub use container::{BoxKind, BoxWidget};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

impl Rect {
    pub const fn new(pos: [f32; 2], size: [f32; 2]) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos[0]
    }

    pub fn top(&self) -> f32 {
        self.pos[1]
    }

    pub fn right(&self) -> f32 {
        self.pos[0] + self.size[0]
    }

    pub fn bottom(&self) -> f32 {
        self.pos[1] + self.size[1]
    }

    /// Shrink by `amount` on every side. Size never goes negative; a
    /// negative amount grows the rectangle.
    pub fn padded(&self, amount: f32) -> Self {
        Self {
            pos: [self.pos[0] + amount, self.pos[1] + amount],
            size: [
                (self.size[0] - 2.0 * amount).max(0.0),
                (self.size[1] - 2.0 * amount).max(0.0),
            ],
        }
    }

    /// Whether `point` lies inside. Left and top edges are inclusive.
    pub fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.left()
            && point[0] < self.right()
            && point[1] >= self.top()
            && point[1] < self.bottom()
    }
}

/// Geometry shared by every widget.
///
/// Setters must leave dependent state (child layout, grid shape) up to date
/// before they return.
pub trait Widget {
    fn rect(&self) -> Rect;

    fn set_pos(&mut self, pos: [f32; 2]);

    fn set_size(&mut self, size: [f32; 2]);

    /// Set position and size together.
    fn set_rect(&mut self, rect: Rect) {
        self.set_pos(rect.pos);
        self.set_size(rect.size);
    }

    fn pos(&self) -> [f32; 2] {
        self.rect().pos
    }

    fn size(&self) -> [f32; 2] {
        self.rect().size
    }
}

/// Process-unique identity of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(u64);

impl BoxId {
    /// A fresh id, never handed out before in this process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}
