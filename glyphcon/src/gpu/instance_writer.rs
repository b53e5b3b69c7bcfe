//! GPU instance byte buffer writer.

use glyphcon_core::glyph::PackedGlyph;

use super::pipeline::INSTANCE_STRIDE;

/// Reuse an existing GPU buffer if it has enough capacity, otherwise create a new one.
///
/// When `existing` is `Some` and its size >= the data length, writes data
/// into the existing buffer via `queue.write_buffer()` (no allocation).
pub(super) fn reuse_or_create_buffer(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    existing: Option<wgpu::Buffer>,
    data: &[u8],
    label: &str,
) -> wgpu::Buffer {
    let needed = (data.len() as u64).max(INSTANCE_STRIDE);
    if let Some(buf) = existing {
        if buf.size() >= needed {
            if !data.is_empty() {
                queue.write_buffer(&buf, 0, data);
            }
            return buf;
        }
    }
    let buf = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: needed,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    if !data.is_empty() {
        queue.write_buffer(&buf, 0, data);
    }
    buf
}

/// Writes glyph cell instances to a byte buffer without unsafe code.
pub(super) struct InstanceWriter {
    data: Vec<u8>,
}

impl InstanceWriter {
    pub(super) fn new() -> Self {
        Self {
            data: Vec::with_capacity(4096),
        }
    }

    pub(super) fn clear(&mut self) {
        self.data.clear();
    }

    /// Push one 32-byte cell record: the y-up cell position followed by the
    /// six packed bytes, each widened to `f32`.
    pub(super) fn push_cell(&mut self, pos: [f32; 2], cell: PackedGlyph) {
        for &v in &pos {
            self.data.extend_from_slice(&v.to_ne_bytes());
        }
        for &b in cell.bytes_012.iter().chain(&cell.bytes_345) {
            self.data.extend_from_slice(&f32::from(b).to_ne_bytes());
        }
    }

    pub(super) fn count(&self) -> u32 {
        (self.data.len() / INSTANCE_STRIDE as usize) as u32
    }

    pub(super) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
