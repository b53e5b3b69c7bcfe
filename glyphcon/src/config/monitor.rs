//! Config file change monitor: watches the TOML file and asks the event loop
//! to reload.

use std::path::Path;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, info, warn};
use notify::{RecursiveMode, Watcher};
use winit::event_loop::EventLoopProxy;

use super::config_path;
use crate::app::AppEvent;

const DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches the config file's parent directory and sends
/// `AppEvent::ConfigReload` when the config file changes.
pub struct ConfigMonitor {
    shutdown_tx: mpsc::Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl ConfigMonitor {
    /// Start watching. Returns `None` if the parent directory doesn't exist
    /// or the platform watcher can't be created.
    pub fn new(proxy: EventLoopProxy<AppEvent>) -> Option<Self> {
        let path = config_path();
        let parent = path.parent()?.to_path_buf();

        if !parent.exists() {
            debug!(
                "config_monitor: {} does not exist, not watching",
                parent.display()
            );
            return None;
        }

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let (notify_tx, notify_rx) = mpsc::channel();

        let mut watcher = match notify::recommended_watcher(notify_tx) {
            Ok(w) => w,
            Err(e) => {
                warn!("config_monitor: failed to create watcher: {e}");
                return None;
            }
        };

        if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
            warn!("config_monitor: failed to watch {}: {e}", parent.display());
            return None;
        }

        info!("config_monitor: watching {}", parent.display());

        let thread = std::thread::Builder::new()
            .name("config-watcher".into())
            .spawn(move || {
                // The watcher stops when dropped.
                let _watcher = watcher;
                watch_loop(&path, &proxy, &notify_rx, &shutdown_rx);
            })
            .ok()?;

        Some(Self {
            shutdown_tx,
            thread: Some(thread),
        })
    }

    /// Stop the watcher thread. A thread still waiting on the file system
    /// exits at its next event and is not joined.
    pub fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.thread.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

fn concerns(event: &notify::Result<notify::Event>, config_file: &Path) -> bool {
    match event {
        Ok(ev) => ev.paths.iter().any(|p| p == config_file),
        Err(_) => false,
    }
}

fn watch_loop(
    config_file: &Path,
    proxy: &EventLoopProxy<AppEvent>,
    notify_rx: &mpsc::Receiver<notify::Result<notify::Event>>,
    shutdown_rx: &mpsc::Receiver<()>,
) {
    while let Ok(event) = notify_rx.recv() {
        if shutdown_rx.try_recv().is_ok() {
            return;
        }
        if !concerns(&event, config_file) {
            continue;
        }

        // Editors often write in several steps.
        while notify_rx.recv_timeout(DEBOUNCE).is_ok() {}

        if shutdown_rx.try_recv().is_ok() {
            return;
        }

        debug!("config_monitor: config file changed");
        if proxy.send_event(AppEvent::ConfigReload).is_err() {
            return;
        }
    }
}
