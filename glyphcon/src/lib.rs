//! Demo host for `glyphcon_core`: a winit window with one console laid out in
//! a box, drawn through wgpu.

pub mod app;
pub mod config;
mod error;
pub mod gpu;
pub mod logging;

pub use error::AppError;
