//! wgpu instance, adapter, device and surface setup.

use std::sync::Arc;

use log::info;
use winit::window::Window;

use crate::AppError;

/// GPU state for the window.
pub struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub surface_alpha_mode: wgpu::CompositeAlphaMode,
}

impl GpuState {
    /// Initialize GPU: instance, adapter, device and queue, plus the
    /// configured surface for `window`, which is also used to pick a
    /// compatible adapter.
    pub fn new(
        window: &Arc<Window>,
    ) -> Result<(Self, wgpu::Surface<'static>, wgpu::SurfaceConfiguration), AppError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("glyphcon"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            ..Default::default()
        }))?;

        let caps = surface.get_capabilities(&adapter);
        // Colors are written as given; a non-sRGB target keeps them unconverted.
        let surface_format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or(AppError::NoSurfaceFormat)?;
        let surface_alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        info!(
            "GPU init: adapter={}, format={surface_format:?}",
            adapter.get_info().name,
        );

        let gpu = Self {
            device,
            queue,
            surface_format,
            surface_alpha_mode,
        };
        let config = gpu.surface_config(window);
        surface.configure(&gpu.device, &config);
        Ok((gpu, surface, config))
    }

    fn surface_config(&self, window: &Window) -> wgpu::SurfaceConfiguration {
        let size = window.inner_size();
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: self.surface_alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    /// Apply a new window size to a surface.
    pub fn resize_surface(
        &self,
        surface: &wgpu::Surface<'_>,
        config: &mut wgpu::SurfaceConfiguration,
        width: u32,
        height: u32,
    ) {
        config.width = width.max(1);
        config.height = height.max(1);
        surface.configure(&self.device, config);
    }
}
