//! Configuration hot-reload: applies config changes to the console and boxes.

use log::{info, warn};

use crate::config::Config;

use super::{App, Theme};

impl App {
    /// Reload the config file and apply what changed. A file that fails to
    /// read, parse or validate leaves the current config in place.
    pub(super) fn apply_config_reload(&mut self) {
        let new_config = match Config::try_load() {
            Ok(c) => c,
            Err(e) => {
                warn!("config reload: {e}");
                return;
            }
        };
        let theme = match Theme::from_config(&new_config) {
            Ok(t) => t,
            Err(e) => {
                warn!("config reload: {e}");
                return;
            }
        };

        self.console.apply_settings(theme.settings);

        let old = &self.config.window;
        let new = &new_config.window;
        if (new.padding - old.padding).abs() > f32::EPSILON {
            self.layout.set_padding(new.padding);
        }
        if (new.margin - old.margin).abs() > f32::EPSILON {
            self.layout.set_margin(new.margin);
        }
        if theme.border != self.theme.border {
            self.layout.set_border(theme.border);
        }
        if theme.background != self.theme.background {
            if let Some(frame) = &self.frame {
                frame.window.request_redraw();
            }
        }
        let title_changed = new.title != old.title;

        self.config = new_config;
        self.theme = theme;
        if title_changed {
            self.update_title();
        }
        self.apply_layout_events();
        info!("config reload: applied");
    }
}
