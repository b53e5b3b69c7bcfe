//! GPU rendering: wgpu state, the glyph and outline pipelines and the
//! console sink.

mod instance_writer;
mod outline;
pub mod pipeline;
pub mod renderer;
pub mod state;

pub use renderer::GlyphRenderer;
pub use state::GpuState;
