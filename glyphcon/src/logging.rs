//! File logger behind the `log` facade.
//!
//! Lines go to `glyphcon_debug.log` next to the executable, truncated at
//! startup. The level comes from `GLYPHCON_LOG` (`error`, `warn`, `info`,
//! `debug`, `trace` or `off`), defaulting to `info`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use crate::AppError;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "GLYPHCON_LOG";

const LOG_FILE: &str = "glyphcon_debug.log";

/// Path of the debug log: next to the executable, or the working directory
/// when that can't be determined.
pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(Path::new("."))
        .join(LOG_FILE)
}

/// Parse a level name. Unknown or missing values give `Info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

struct FileLogger {
    file: Mutex<File>,
    start: Instant,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{:>9.3}] {:<5} {}: {}\n",
            self.start.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
        let _ = self.file.lock().write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

/// Install the file logger. Call once, before anything logs.
pub fn init() -> Result<(), AppError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    let file = File::create(log_path()).map_err(AppError::LogFile)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
        start: Instant::now(),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}
