//! Tests for the event system.

use std::sync::{Arc, Mutex};

use super::{Emitter, Event, EventListener, VoidListener};
use crate::layout::{BoxId, Rect};

/// Listener that records every event it receives.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Event>>>);

impl Recorder {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl EventListener for Recorder {
    fn send_event(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }
}

fn rect_change(id: BoxId, x: f32) -> Event {
    Event::RectChange {
        id,
        rect: Rect::new([x, 0.0], [10.0, 10.0]),
    }
}

#[test]
fn void_listener_implements_event_listener() {
    let listener = VoidListener;
    // The default no-op body runs.
    listener.send_event(Event::Redraw { id: BoxId::next() });
}

#[test]
fn void_listener_is_send_and_static() {
    fn assert_send_static<T: Send + 'static>() {}
    assert_send_static::<VoidListener>();
}

#[test]
fn event_source() {
    let id = BoxId::next();
    assert_eq!(rect_change(id, 0.0).source(), id);
    assert_eq!(Event::Redraw { id }.source(), id);
}

#[test]
fn unblocked_emit_delivers_immediately() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new();
    let id = BoxId::next();
    emitter.emit(&rec, rect_change(id, 1.0));
    assert_eq!(rec.take(), vec![rect_change(id, 1.0)]);
    assert!(emitter.pending().is_empty());
}

#[test]
fn blocked_events_merge_into_latest() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new();
    let id = BoxId::next();

    emitter.block();
    emitter.emit(&rec, rect_change(id, 1.0));
    emitter.emit(&rec, rect_change(id, 2.0));
    emitter.emit(&rec, rect_change(id, 3.0));
    assert!(rec.take().is_empty());
    assert_eq!(emitter.pending().len(), 1);

    emitter.unblock(&rec);
    assert_eq!(rec.take(), vec![rect_change(id, 3.0)]);
}

#[test]
fn nested_blocks_flush_only_at_outermost() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new();
    let id = BoxId::next();

    emitter.block();
    emitter.block();
    assert_eq!(emitter.depth(), 2);
    emitter.emit(&rec, rect_change(id, 1.0));
    emitter.unblock(&rec);
    assert!(emitter.is_blocked());
    assert!(rec.take().is_empty());
    emitter.emit(&rec, rect_change(id, 2.0));
    emitter.unblock(&rec);
    assert!(!emitter.is_blocked());
    assert_eq!(rec.take(), vec![rect_change(id, 2.0)]);
}

#[test]
fn distinct_kinds_and_sources_are_kept_in_order() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new();
    let (a, b) = (BoxId::next(), BoxId::next());

    emitter.block();
    emitter.emit(&rec, Event::Redraw { id: a });
    emitter.emit(&rec, rect_change(a, 1.0));
    emitter.emit(&rec, rect_change(b, 1.0));
    emitter.emit(&rec, Event::Redraw { id: a });
    emitter.unblock(&rec);

    assert_eq!(
        rec.take(),
        vec![Event::Redraw { id: a }, rect_change(a, 1.0), rect_change(b, 1.0)]
    );
}

#[test]
fn unbalanced_unblock_is_ignored() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new();
    emitter.unblock(&rec);
    assert_eq!(emitter.depth(), 0);
    let id = BoxId::next();
    emitter.emit(&rec, rect_change(id, 0.0));
    assert_eq!(rec.take().len(), 1);
}
