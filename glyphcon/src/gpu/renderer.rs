//! The wgpu glyph sink: uploads console batches and box outlines and draws
//! them.

use std::convert::Infallible;

use log::{trace, warn};

use glyphcon_core::{Damage, GlyphBatch, GlyphSink, Rgba};

use super::instance_writer::{InstanceWriter, reuse_or_create_buffer};
use super::outline::OutlineWriter;
use super::pipeline::{
    UNIFORM_SIZE, create_glyph_pipeline, create_outline_pipeline, create_uniform_bind_group_layout,
};
use super::state::GpuState;

/// Pack the uniform block: color, origin, `px_scale`, scale, padding.
pub fn uniform_bytes(batch: &GlyphBatch<'_>) -> [u8; UNIFORM_SIZE as usize] {
    let t = batch.transform;
    let values: [f32; 12] = [
        batch.color.red(),
        batch.color.green(),
        batch.color.blue(),
        batch.color.alpha(),
        t.origin[0],
        t.origin[1],
        t.px_scale[0],
        t.px_scale[1],
        batch.scale as f32,
        0.0,
        0.0,
        0.0,
    ];
    let mut out = [0u8; UNIFORM_SIZE as usize];
    for (chunk, v) in out.chunks_exact_mut(4).zip(values) {
        chunk.copy_from_slice(&v.to_ne_bytes());
    }
    out
}

/// Owns the glyph and outline pipelines and the buffers of the last
/// uploaded batch.
///
/// [`GlyphSink::draw_glyphs`] only uploads; [`GlyphRenderer::render`] draws
/// whatever was last uploaded over a cleared frame. Batches without damage
/// keep the previous upload. Outlines are queued per frame: `render` draws
/// and then forgets them.
pub struct GlyphRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    instance_buffer: Option<wgpu::Buffer>,
    writer: InstanceWriter,
    count: u32,
    outline_pipeline: wgpu::RenderPipeline,
    outline_buffer: Option<wgpu::Buffer>,
    outlines: OutlineWriter,
}

impl GlyphRenderer {
    pub fn new(gpu: &GpuState) -> Self {
        let uniform_layout = create_uniform_bind_group_layout(&gpu.device);
        let pipeline = create_glyph_pipeline(&gpu.device, gpu.surface_format, &uniform_layout, None);
        let outline_pipeline = create_outline_pipeline(&gpu.device, gpu.surface_format, None);

        let uniform_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("glyph_uniforms"),
            size: UNIFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glyph_uniform_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            device: gpu.device.clone(),
            queue: gpu.queue.clone(),
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            instance_buffer: None,
            writer: InstanceWriter::new(),
            count: 0,
            outline_pipeline,
            outline_buffer: None,
            outlines: OutlineWriter::default(),
        }
    }

    /// Number of cell instances in the last upload.
    pub fn instance_count(&self) -> u32 {
        self.count
    }

    /// Clear the next surface frame to `background`, draw the queued
    /// outlines and the uploaded glyphs over it, and present.
    pub fn render(
        &mut self,
        surface: &wgpu::Surface<'_>,
        config: &wgpu::SurfaceConfiguration,
        background: Rgba,
    ) {
        let (outline_bytes, outline_runs) = self
            .outlines
            .build(config.width as f32, config.height as f32);
        self.outlines.clear();
        if !outline_runs.is_empty() {
            self.outline_buffer = Some(reuse_or_create_buffer(
                &self.device,
                &self.queue,
                self.outline_buffer.take(),
                &outline_bytes,
                "outline_vertices",
            ));
        }

        let frame = match surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost) => {
                surface.configure(&self.device, config);
                return;
            }
            Err(e) => {
                warn!("surface error: {e}");
                return;
            }
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glyph_frame"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("glyph_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(background.red()),
                            g: f64::from(background.green()),
                            b: f64::from(background.blue()),
                            a: f64::from(background.alpha()),
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            if let Some(buffer) = &self.outline_buffer {
                if !outline_runs.is_empty() {
                    rpass.set_pipeline(&self.outline_pipeline);
                    rpass.set_vertex_buffer(0, buffer.slice(..));
                    for run in outline_runs {
                        rpass.draw(run, 0..1);
                    }
                }
            }
            if let Some(buffer) = &self.instance_buffer {
                if self.count > 0 {
                    rpass.set_pipeline(&self.pipeline);
                    rpass.set_bind_group(0, &self.uniform_bind_group, &[]);
                    rpass.set_vertex_buffer(0, buffer.slice(..));
                    rpass.draw(0..4, 0..self.count);
                }
            }
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}

impl GlyphSink for GlyphRenderer {
    type Error = Infallible;

    fn draw_glyphs(&mut self, batch: &GlyphBatch<'_>) -> Result<(), Self::Error> {
        let fresh = self.instance_buffer.is_none();
        if fresh || batch.damage.intersects(Damage::STYLE | Damage::GEOMETRY) {
            self.queue
                .write_buffer(&self.uniform_buffer, 0, &uniform_bytes(batch));
        }
        if fresh || batch.damage.intersects(Damage::CELLS | Damage::GEOMETRY) {
            self.writer.clear();
            for (pos, cell) in batch.cells() {
                if !cell.is_empty() {
                    self.writer.push_cell(pos, cell);
                }
            }
            self.instance_buffer = Some(reuse_or_create_buffer(
                &self.device,
                &self.queue,
                self.instance_buffer.take(),
                self.writer.as_bytes(),
                "glyph_instances",
            ));
            self.count = self.writer.count();
            trace!("uploaded {} glyph instances", self.count);
        }
        Ok(())
    }

    fn draw_outline(&mut self, points: &[[f32; 2]], color: Rgba) -> Result<(), Self::Error> {
        if color.alpha() > 0.0 {
            self.outlines.push(points, color);
        }
        Ok(())
    }
}
