//! Widget event types, listener trait and the blockable emitter.
//!
//! Events flow outward from widgets to the host. The `EventListener` trait
//! decouples `BoxWidget<T>` from any specific UI framework: tests use
//! `VoidListener` or a recording listener, the demo app queues events behind
//! a mutex and drains them on the event loop.

use crate::layout::{BoxId, Rect};

/// Notifications produced by widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A box's outer rectangle changed. Carries the new rectangle.
    RectChange { id: BoxId, rect: Rect },
    /// A box's appearance changed without a geometry change.
    Redraw { id: BoxId },
}

impl Event {
    /// The box that produced this event.
    pub fn source(&self) -> BoxId {
        match *self {
            Self::RectChange { id, .. } | Self::Redraw { id } => id,
        }
    }

    /// Whether `other` supersedes `self` when both are held back.
    fn superseded_by(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.source() == other.source()
    }
}

/// Receives widget events.
///
/// The default implementation is a no-op, so `VoidListener` needs no
/// method body. Real implementations route events to the host's event loop.
///
/// Bound: `Send + 'static` because hosts forward events across threads.
pub trait EventListener: Send + 'static {
    /// Handle a widget event. Default: no-op.
    fn send_event(&self, _event: Event) {}
}

/// No-op event listener for tests and headless operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidListener;

impl EventListener for VoidListener {}

/// Emits events, or holds them back while blocked.
///
/// `block`/`unblock` nest. While the depth is non-zero, emitted events are
/// queued and a later event of the same kind from the same source replaces
/// the earlier one. When the outermost `unblock` runs, whatever is queued is
/// delivered in first-emitted order.
#[derive(Debug, Default)]
pub struct Emitter {
    depth: usize,
    pending: Vec<Event>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocked(&self) -> bool {
        self.depth > 0
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn block(&mut self) {
        self.depth += 1;
    }

    /// Leave one blocking scope, flushing merged events at depth zero.
    ///
    /// An unbalanced `unblock` is ignored.
    pub fn unblock<L: EventListener + ?Sized>(&mut self, listener: &L) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            for event in self.pending.drain(..) {
                listener.send_event(event);
            }
        }
    }

    /// Deliver `event` now, or queue it if blocked.
    pub fn emit<L: EventListener + ?Sized>(&mut self, listener: &L, event: Event) {
        if self.depth == 0 {
            listener.send_event(event);
            return;
        }
        match self.pending.iter_mut().find(|e| e.superseded_by(&event)) {
            Some(slot) => *slot = event,
            None => self.pending.push(event),
        }
    }

    /// Events currently held back.
    pub fn pending(&self) -> &[Event] {
        &self.pending
    }
}

#[cfg(test)]
mod tests;
