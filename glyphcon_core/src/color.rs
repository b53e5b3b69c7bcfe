//! Straight (non-premultiplied) RGBA colors and their textual forms.

use std::fmt;
use std::str::FromStr;

use crate::error::ConsoleError;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Build an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    pub fn red(self) -> f32 {
        self.0[0]
    }

    pub fn green(self) -> f32 {
        self.0[1]
    }

    pub fn blue(self) -> f32 {
        self.0[2]
    }

    pub fn alpha(self) -> f32 {
        self.0[3]
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, alpha.clamp(0.0, 1.0)])
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA` (leading `#` optional) or one of
    /// a handful of basic color names. Returns `None` on anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(named) = named_color(s) {
            return Some(named);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize, len: usize| -> Option<u8> {
            let digits = hex.get(i..i + len)?;
            let v = u8::from_str_radix(digits, 16).ok()?;
            Some(if len == 1 { v * 17 } else { v })
        };
        match hex.len() {
            3 => Some(Self::from_rgb8(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            6 => Some(Self::from_rgb8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => {
                let a = channel(6, 2)?;
                Some(
                    Self::from_rgb8(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)
                        .with_alpha(f32::from(a) / 255.0),
                )
            }
            _ => None,
        }
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

fn named_color(name: &str) -> Option<Rgba> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Rgba::BLACK,
        "white" => Rgba::WHITE,
        "red" => Rgba([1.0, 0.0, 0.0, 1.0]),
        "green" => Rgba([0.0, 1.0, 0.0, 1.0]),
        "blue" => Rgba([0.0, 0.0, 1.0, 1.0]),
        "yellow" => Rgba([1.0, 1.0, 0.0, 1.0]),
        "cyan" => Rgba([0.0, 1.0, 1.0, 1.0]),
        "magenta" => Rgba([1.0, 0.0, 1.0, 1.0]),
        "gray" | "grey" => Rgba([0.5, 0.5, 0.5, 1.0]),
        "transparent" => Rgba::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

impl FromStr for Rgba {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConsoleError::Configuration(format!("invalid color {s:?}")))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}
