//! Render pipelines: the glyph point-sprite pipeline that decodes packed
//! cells in the fragment shader, and the line-strip pipeline for box
//! outlines. Both blend with straight alpha over the cleared frame.

/// Instance data stride in bytes: 32 bytes per cell instance.
///
/// Layout:
///   [0..8]   pos:       vec2<f32>  (y-up cell offset in glyph pixels)
///   [8..20]  `bytes_012`: vec3<f32>  (packed bytes 0, 1, 2)
///   [20..32] `bytes_345`: vec3<f32>  (packed bytes 3, 4, 5)
pub const INSTANCE_STRIDE: u64 = 32;

/// Uniform block size: color, origin, `px_scale`, scale, padded to 16.
pub const UNIFORM_SIZE: u64 = 48;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 0,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 8,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 20,
        shader_location: 2,
    },
];

pub fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: INSTANCE_STRIDE,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

/// Outline vertex stride: clip-space `pos` (vec2) then `color` (vec4).
pub const OUTLINE_VERTEX_STRIDE: u64 = 24;

const OUTLINE_ATTRS: [wgpu::VertexAttribute; 2] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 0,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 8,
        shader_location: 1,
    },
];

pub fn outline_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: OUTLINE_VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &OUTLINE_ATTRS,
    }
}

/// Straight alpha: rgb = src * a + dst * (1 - a).
const STRAIGHT_ALPHA: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
};

// --- WGSL Shader ---

// Each instance is an 8x8 point sprite. The fragment stage picks the glyph
// pixel under the fragment and discards it unless its bit is set:
// idx = row * 6 + col, byte idx / 8, bit 7 - idx % 8.
const GLYPH_SHADER_SRC: &str = "
struct Uniforms {
    color: vec4<f32>,
    origin: vec2<f32>,
    px_scale: vec2<f32>,
    scale: f32,
}

@group(0) @binding(0) var<uniform> u: Uniforms;

struct CellInput {
    @location(0) pos: vec2<f32>,
    @location(1) bytes_012: vec3<f32>,
    @location(2) bytes_345: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) point_coord: vec2<f32>,
    @location(1) @interpolate(flat) bytes_012: vec3<f32>,
    @location(2) @interpolate(flat) bytes_345: vec3<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vi: u32, input: CellInput) -> VertexOutput {
    let corner = vec2<f32>(f32(vi & 1u), f32((vi >> 1u) & 1u));
    let center = u.origin + input.pos * u.px_scale * u.scale;
    let extent = 8.0 * u.scale * abs(u.px_scale);
    let offset = vec2<f32>(corner.x - 0.5, 0.5 - corner.y) * extent;

    var out: VertexOutput;
    out.position = vec4<f32>(center + offset, 0.0, 1.0);
    out.point_coord = corner;
    out.bytes_012 = input.bytes_012;
    out.bytes_345 = input.bytes_345;
    return out;
}

fn packed_byte(b012: vec3<f32>, b345: vec3<f32>, n: u32) -> u32 {
    var v = b345.z;
    switch n {
        case 0u: { v = b012.x; }
        case 1u: { v = b012.y; }
        case 2u: { v = b012.z; }
        case 3u: { v = b345.x; }
        case 4u: { v = b345.y; }
        default: {}
    }
    return u32(v + 0.5);
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let col = u32(floor(input.point_coord.x * 8.0));
    let row = u32(floor(input.point_coord.y * 8.0));
    if (col >= 6u || row >= 8u) {
        discard;
    }
    let idx = row * 6u + col;
    let bits = packed_byte(input.bytes_012, input.bytes_345, idx / 8u);
    if (((bits >> (7u - idx % 8u)) & 1u) == 0u) {
        discard;
    }
    return u.color;
}
";

// Outline vertices arrive in clip space; the color rides along per vertex.
const OUTLINE_SHADER_SRC: &str = "
struct OutlineInput {
    @location(0) pos: vec2<f32>,
    @location(1) color: vec4<f32>,
}

struct OutlineOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_outline(input: OutlineInput) -> OutlineOutput {
    var out: OutlineOutput;
    out.position = vec4<f32>(input.pos, 0.0, 1.0);
    out.color = input.color;
    return out;
}

@fragment
fn fs_outline(input: OutlineOutput) -> @location(0) vec4<f32> {
    return input.color;
}
";

/// Uniform bind group layout: group(0) binding(0) = uniform buffer.
pub fn create_uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("glyph_uniform_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(UNIFORM_SIZE),
            },
            count: None,
        }],
    })
}

/// Glyph pipeline: point-sprite quads, straight-alpha blended over the target.
pub fn create_glyph_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    uniform_layout: &wgpu::BindGroupLayout,
    pipeline_cache: Option<&wgpu::PipelineCache>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("glyph_shader"),
        source: wgpu::ShaderSource::Wgsl(GLYPH_SHADER_SRC.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("glyph_pipeline_layout"),
        bind_group_layouts: &[uniform_layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("glyph_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[instance_buffer_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(STRAIGHT_ALPHA),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: pipeline_cache,
    })
}

/// Outline pipeline: one-pixel line strips, no bind groups.
pub fn create_outline_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    pipeline_cache: Option<&wgpu::PipelineCache>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("outline_shader"),
        source: wgpu::ShaderSource::Wgsl(OUTLINE_SHADER_SRC.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("outline_pipeline_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("outline_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_outline"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[outline_buffer_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_outline"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(STRAIGHT_ALPHA),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: pipeline_cache,
    })
}
