//! `BoxWidget`: a rectangle with border, margin and padding that lays out
//! child boxes inside it.

use log::trace;

use super::{BoxId, Rect, Widget};
use crate::color::Rgba;
use crate::event::{Emitter, Event, EventListener};
use crate::render::GlyphSink;

/// What a child box is for. The container treats all kinds alike; hosts use
/// the kind to decide what to attach to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxKind {
    #[default]
    Plain,
    /// Hosts a grid of further boxes.
    Grid,
    /// Hosts a view such as a console.
    View,
}

/// Rectangular container.
///
/// Every child fills `rect().padded(padding + margin)` and is repositioned
/// whenever that content area changes. Geometry changes fire
/// [`Event::RectChange`] through the listener; [`set_rect`](Widget::set_rect)
/// fires exactly one.
#[derive(Debug)]
pub struct BoxWidget<T: EventListener + Clone> {
    id: BoxId,
    kind: BoxKind,
    rect: Rect,
    border: Rgba,
    margin: f32,
    padding: f32,
    clip: bool,
    outline: [[f32; 2]; 5],
    children: Vec<BoxWidget<T>>,
    emitter: Emitter,
    event_listener: T,
}

impl<T: EventListener + Clone> BoxWidget<T> {
    /// A plain box at the origin with size 1×1.
    pub fn new(event_listener: T) -> Self {
        Self::with_kind(BoxKind::Plain, event_listener)
    }

    fn with_kind(kind: BoxKind, event_listener: T) -> Self {
        let mut b = Self {
            id: BoxId::next(),
            kind,
            rect: Rect::new([0.0, 0.0], [1.0, 1.0]),
            border: Rgba::BLACK,
            margin: 0.0,
            padding: 0.0,
            clip: false,
            outline: [[0.0; 2]; 5],
            children: Vec::new(),
            emitter: Emitter::new(),
            event_listener,
        };
        b.update_outline();
        b
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    pub fn border(&self) -> Rgba {
        self.border
    }

    pub fn set_border(&mut self, color: Rgba) {
        self.border = color;
        self.emit(Event::Redraw { id: self.id });
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: f32) {
        self.margin = margin;
        self.update_outline();
        self.layout_children();
        self.emit(Event::Redraw { id: self.id });
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
        self.layout_children();
    }

    pub fn clip(&self) -> bool {
        self.clip
    }

    pub fn set_clip(&mut self, clip: bool) {
        self.clip = clip;
    }

    /// Closed border polyline: the rect inset by the margin, clockwise from
    /// the top-left corner, first point repeated.
    pub fn outline(&self) -> [[f32; 2]; 5] {
        self.outline
    }

    /// Stroke this box's outline in its border color, then every
    /// descendant's, parents first. Fully transparent borders are skipped.
    pub fn draw_outlines<S: GlyphSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        if self.border.alpha() > 0.0 {
            sink.draw_outline(&self.outline, self.border)?;
        }
        for child in &self.children {
            child.draw_outlines(sink)?;
        }
        Ok(())
    }

    /// Area children are laid out in.
    pub fn content_rect(&self) -> Rect {
        self.rect.padded(self.padding + self.margin)
    }

    pub fn add_box(&mut self) -> &mut Self {
        self.add_child(BoxKind::Plain)
    }

    pub fn add_grid(&mut self) -> &mut Self {
        self.add_child(BoxKind::Grid)
    }

    pub fn add_view(&mut self) -> &mut Self {
        self.add_child(BoxKind::View)
    }

    /// Detach a direct child.
    pub fn remove_box(&mut self, id: BoxId) -> Option<Self> {
        let idx = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(idx))
    }

    /// Direct child by id.
    pub fn child(&self, id: BoxId) -> Option<&Self> {
        self.children.iter().find(|c| c.id == id)
    }

    pub fn child_mut(&mut self, id: BoxId) -> Option<&mut Self> {
        self.children.iter_mut().find(|c| c.id == id)
    }

    /// This box or any descendant by id.
    pub fn find(&self, id: BoxId) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    fn add_child(&mut self, kind: BoxKind) -> &mut Self {
        let mut child = Self::with_kind(kind, self.event_listener.clone());
        child.set_rect(self.content_rect());
        trace!("box {:?}: add {kind:?} child {:?}", self.id, child.id);
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    fn layout_children(&mut self) {
        let content = self.content_rect();
        for child in &mut self.children {
            child.set_rect(content);
        }
    }

    fn update_outline(&mut self) {
        let r = self.rect.padded(self.margin);
        let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
        self.outline = [[l, t], [rt, t], [rt, b], [l, b], [l, t]];
    }

    /// Hold back events from this box and every descendant.
    fn block_tree(&mut self) {
        self.emitter.block();
        for child in &mut self.children {
            child.block_tree();
        }
    }

    /// Parents flush before their children.
    fn unblock_tree(&mut self) {
        self.emitter.unblock(&self.event_listener);
        for child in &mut self.children {
            child.unblock_tree();
        }
    }

    fn emit(&mut self, event: Event) {
        self.emitter.emit(&self.event_listener, event);
    }

    fn rect_changed(&mut self) {
        self.update_outline();
        self.layout_children();
        self.emit(Event::RectChange {
            id: self.id,
            rect: self.rect,
        });
    }
}

impl<T: EventListener + Clone> Widget for BoxWidget<T> {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_pos(&mut self, pos: [f32; 2]) {
        self.rect.pos = pos;
        self.rect_changed();
    }

    fn set_size(&mut self, size: [f32; 2]) {
        self.rect.size = size;
        self.rect_changed();
    }

    fn set_rect(&mut self, rect: Rect) {
        self.block_tree();
        self.set_pos(rect.pos);
        self.set_size(rect.size);
        self.unblock_tree();
    }
}
