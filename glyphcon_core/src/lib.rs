//! Core data structures for packed-glyph text consoles.
//!
//! This crate provides the foundational pieces of a GPU bitmap-text console:
//! the built-in 6×8 font and its two-triple packing, text sanitizing and
//! wrapping, the scroll buffer whose byte planes feed the glyph shader, the
//! console orchestrator, and the box container used to lay consoles out. It
//! contains no GPU, windowing or platform-specific code; drawing goes
//! through the [`GlyphSink`] trait.

#![deny(unsafe_code)]

pub mod color;
pub mod console;
pub mod error;
pub mod event;
pub mod glyph;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod text;

pub use color::Rgba;
pub use console::{Console, ConsoleSettings};
pub use error::ConsoleError;
pub use event::{Emitter, Event, EventListener, VoidListener};
pub use glyph::{Glyph, PackedGlyph, glyph_for, lookup};
pub use layout::{BoxId, BoxKind, BoxWidget, Rect, Widget};
pub use render::{Damage, GlyphBatch, GlyphSink, Transform2D};
pub use scroll::{Orientation, ScrollBuffer};
