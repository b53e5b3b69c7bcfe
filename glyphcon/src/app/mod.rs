//! Application state and startup.

mod config_reload;
mod event_loop;
mod layout;

use std::io::BufRead;
use std::sync::Arc;

use log::{debug, info, warn};
use winit::event_loop::{EventLoop, EventLoopProxy};
use winit::window::Window;

use glyphcon_core::{Console, ConsoleError, ConsoleSettings, Event, Rgba, Transform2D, Widget};

use crate::AppError;
use crate::config::Config;
use crate::config::monitor::ConfigMonitor;
use crate::gpu::{GlyphRenderer, GpuState};

pub use layout::{Layout, LayoutQueue};

/// Events delivered to the winit event loop from other threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One line read from stdin, without its line terminator.
    Line(Vec<u8>),
    /// The config file changed on disk.
    ConfigReload,
}

/// Parsed config values the app applies to the console and boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub settings: ConsoleSettings,
    pub background: Rgba,
    pub border: Rgba,
}

impl Theme {
    pub fn from_config(config: &Config) -> Result<Self, ConsoleError> {
        Ok(Self {
            settings: config.console.to_settings()?,
            background: config.window.background_color()?,
            border: config.window.border_color()?,
        })
    }
}

/// Window, surface and renderer, created once the event loop resumes.
struct Frame {
    window: Arc<Window>,
    gpu: GpuState,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    renderer: GlyphRenderer,
}

pub struct App {
    config: Config,
    theme: Theme,
    layout: Layout,
    console: Console,
    /// Text typed into the window, written on Enter.
    line: String,
    frame: Option<Frame>,
    monitor: Option<ConfigMonitor>,
    failure: Option<AppError>,
}

impl App {
    fn new(config: Config, monitor: Option<ConfigMonitor>) -> Result<Self, AppError> {
        let theme = Theme::from_config(&config)?;
        let layout = Layout::new(config.window.padding, config.window.margin, theme.border);
        let console = Console::new(theme.settings);
        Ok(Self {
            config,
            theme,
            layout,
            console,
            line: String::new(),
            frame: None,
            monitor,
            failure: None,
        })
    }

    /// Load config, open the window and run until it closes.
    pub fn run() -> Result<(), AppError> {
        info!("starting glyphcon {}", env!("CARGO_PKG_VERSION"));
        let config = Config::load();
        debug!(
            "config: scale={}, orientation={}, wrap={}, window={}x{}",
            config.console.font_scale,
            config.console.orientation,
            config.console.wrap,
            config.window.width,
            config.window.height,
        );

        let event_loop = EventLoop::<AppEvent>::with_user_event().build()?;
        let proxy = event_loop.create_proxy();
        spawn_stdin_reader(proxy.clone());
        let monitor = ConfigMonitor::new(proxy);

        let mut app = Self::new(config, monitor)?;
        event_loop.run_app(&mut app)?;

        if let Some(monitor) = app.monitor.take() {
            monitor.shutdown();
        }
        match app.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Write one line from stdin or the keyboard.
    fn write_line(&mut self, bytes: &[u8]) {
        match self.console.write_bytes(bytes, self.config.console.wrap) {
            Ok(lines) => debug!("wrote {} bytes as {lines} line(s)", bytes.len()),
            Err(e) => warn!("input dropped: {e}"),
        }
    }

    /// Apply queued box events: every change can move the console box, so
    /// the console is re-placed once per drain, and every change alters an
    /// outline, so a new frame is requested.
    fn apply_layout_events(&mut self) {
        let events = self.layout.events.drain();
        if events.is_empty() {
            return;
        }
        for event in &events {
            match event {
                Event::RectChange { id, rect } => debug!("layout: box {id:?} -> {rect:?}"),
                Event::Redraw { id } => debug!("layout: box {id:?} redraw"),
            }
        }
        self.place_console();
        if let Some(frame) = &self.frame {
            frame.window.request_redraw();
        }
    }

    fn place_console(&mut self) {
        let Some(rect) = self.layout.console_rect() else {
            return;
        };
        let window = self.layout.root.size();
        self.console.set_rect(rect);
        self.console.set_transform(Transform2D::ndc(
            rect.pos[0],
            rect.pos[1],
            window[0],
            window[1],
        ));
    }

    /// Show the pending keyboard line in the title bar.
    fn update_title(&self) {
        if let Some(frame) = &self.frame {
            if self.line.is_empty() {
                frame.window.set_title(&self.config.window.title);
            } else {
                frame
                    .window
                    .set_title(&format!("{} > {}", self.config.window.title, self.line));
            }
        }
    }
}

/// Forward stdin lines to the event loop until EOF or the loop closes.
fn spawn_stdin_reader(proxy: EventLoopProxy<AppEvent>) {
    let spawned = std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            let mut stdin = std::io::stdin().lock();
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match stdin.read_until(b'\n', &mut buf) {
                    Ok(0) => {
                        debug!("stdin: end of input");
                        return;
                    }
                    Ok(_) => {
                        if proxy.send_event(AppEvent::Line(trim_line(&buf).to_vec())).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!("stdin: {e}");
                        return;
                    }
                }
            }
        });
    if let Err(e) = spawned {
        warn!("stdin: failed to start reader thread: {e}");
    }
}

/// Strip one trailing `\n` or `\r\n`.
fn trim_line(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
