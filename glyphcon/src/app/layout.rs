//! Box tree for the window and the queue its events land in.

use std::sync::Arc;

use parking_lot::Mutex;

use glyphcon_core::{BoxId, BoxWidget, Event, EventListener, Rect, Rgba};

/// Listener that buffers layout events until the event loop drains them.
#[derive(Debug, Clone, Default)]
pub struct LayoutQueue(Arc<Mutex<Vec<Event>>>);

impl LayoutQueue {
    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.lock())
    }
}

impl EventListener for LayoutQueue {
    fn send_event(&self, event: Event) {
        self.0.lock().push(event);
    }
}

/// Root box filling the window, with one child box that hosts the console.
/// Only the console box has a visible border.
pub struct Layout {
    pub root: BoxWidget<LayoutQueue>,
    pub console_box: BoxId,
    pub events: LayoutQueue,
}

impl Layout {
    pub fn new(padding: f32, margin: f32, border: Rgba) -> Self {
        let events = LayoutQueue::default();
        let mut root = BoxWidget::new(events.clone());
        root.set_border(Rgba::TRANSPARENT);
        root.set_padding(padding);
        let child = root.add_box();
        child.set_margin(margin);
        child.set_border(border);
        let console_box = child.id();
        Self {
            root,
            console_box,
            events,
        }
    }

    /// Where the console goes: inside the console box's padding and margin.
    pub fn console_rect(&self) -> Option<Rect> {
        self.root
            .child(self.console_box)
            .map(BoxWidget::content_rect)
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.root.set_padding(padding);
    }

    pub fn set_margin(&mut self, margin: f32) {
        if let Some(child) = self.root.child_mut(self.console_box) {
            child.set_margin(margin);
        }
    }

    pub fn set_border(&mut self, border: Rgba) {
        if let Some(child) = self.root.child_mut(self.console_box) {
            child.set_border(border);
        }
    }
}
