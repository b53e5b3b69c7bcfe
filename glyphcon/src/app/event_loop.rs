//! winit event loop: `ApplicationHandler` impl.

use std::sync::Arc;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use glyphcon_core::{Rect, Widget};

use crate::AppError;
use crate::gpu::{GlyphRenderer, GpuState};

use super::{App, AppEvent, Frame};

impl App {
    fn create_frame(&self, event_loop: &ActiveEventLoop) -> Result<Frame, AppError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width.max(1),
                self.config.window.height.max(1),
            ));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let (gpu, surface, surface_config) = GpuState::new(&window)?;
        let renderer = GlyphRenderer::new(&gpu);
        Ok(Frame {
            window,
            gpu,
            surface,
            surface_config,
            renderer,
        })
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        if let Some(frame) = &mut self.frame {
            frame
                .gpu
                .resize_surface(&frame.surface, &mut frame.surface_config, width, height);
        }
        self.layout
            .root
            .set_rect(Rect::new([0.0, 0.0], [width as f32, height as f32]));
        self.apply_layout_events();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        match &event.logical_key {
            Key::Named(NamedKey::Enter) => {
                let line = std::mem::take(&mut self.line);
                self.write_line(line.as_bytes());
            }
            Key::Named(NamedKey::Escape) => {
                self.line.clear();
                self.console.clear();
            }
            Key::Named(NamedKey::Backspace) => {
                self.line.pop();
            }
            _ => {
                if let Some(text) = &event.text {
                    self.line.extend(text.chars().filter(|c| !c.is_control()));
                }
            }
        }
        self.update_title();
    }

    fn redraw(&mut self) {
        let Some(frame) = &mut self.frame else {
            return;
        };
        let Ok(()) = self.layout.root.draw_outlines(&mut frame.renderer);
        let Ok(()) = self.console.draw(&mut frame.renderer);
        frame
            .renderer
            .render(&frame.surface, &frame.surface_config, self.theme.background);
        self.console.mark_presented();
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame.is_some() {
            return;
        }
        match self.create_frame(event_loop) {
            Ok(frame) => {
                let size = frame.window.inner_size();
                self.frame = Some(frame);
                self.handle_resize(size.width, size.height);
                info!("window open: {}x{}", size.width, size.height);
            }
            Err(e) => {
                error!("startup failed: {e}");
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::Line(bytes) => self.write_line(&bytes),
            AppEvent::ConfigReload => self.apply_config_reload(),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Only a changed console needs a new frame.
        if !self.console.damage().is_empty() {
            if let Some(frame) = &self.frame {
                frame.window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.handle_resize(size.width, size.height),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}
