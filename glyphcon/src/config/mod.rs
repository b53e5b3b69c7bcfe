//! Configuration structures and loading logic.

mod io;
pub mod monitor;

pub use io::{config_dir, config_path};

use serde::{Deserialize, Serialize};

use glyphcon_core::console::DEFAULT_FONT_SCALE;
use glyphcon_core::{ConsoleError, ConsoleSettings, Orientation, Rgba};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub window: WindowConfig,
}

impl Config {
    /// Check every string-typed field that must parse.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        self.console.to_settings()?;
        self.window.background_color()?;
        self.window.border_color()?;
        Ok(())
    }
}

/// Console appearance and text behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Text color: `#RGB`, `#RRGGBB`, `#RRGGBBAA` or a basic color name.
    pub text_color: String,
    /// Integer magnification of the 6×8 font.
    pub font_scale: u32,
    /// `"scroll-up"` (newest line at the bottom) or `"scroll-down"`.
    pub orientation: String,
    /// Wrap long lines instead of truncating them.
    pub wrap: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            text_color: "#000000".to_owned(),
            font_scale: DEFAULT_FONT_SCALE,
            orientation: Orientation::ScrollUp.as_str().to_owned(),
            wrap: true,
        }
    }
}

impl ConsoleConfig {
    pub fn to_settings(&self) -> Result<ConsoleSettings, ConsoleError> {
        Ok(ConsoleSettings {
            text_color: self.text_color.parse()?,
            font_scale: self.font_scale.max(1),
            orientation: self.orientation.parse()?,
        })
    }
}

/// Window geometry and the box chrome around the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: String,
    /// Space between the root box edge and the console box.
    pub padding: f32,
    /// Inset of the console box's border from its edge.
    pub margin: f32,
    pub border: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "glyphcon".to_owned(),
            background: "#ffffff".to_owned(),
            padding: 8.0,
            margin: 4.0,
            border: "#808080".to_owned(),
        }
    }
}

impl WindowConfig {
    pub fn background_color(&self) -> Result<Rgba, ConsoleError> {
        self.background.parse()
    }

    pub fn border_color(&self) -> Result<Rgba, ConsoleError> {
        self.border.parse()
    }
}
