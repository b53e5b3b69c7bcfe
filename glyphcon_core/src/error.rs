//! Error type shared by the console and its configuration surface.

use thiserror::Error;

/// Failures surfaced by console construction and input validation.
///
/// Everything else in the crate is total: out-of-range code points clamp,
/// non-ASCII text is substituted, and degenerate sizes clamp to one cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Input that is not text was handed to a write operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A configuration value (orientation name, color) could not be used.
    #[error("configuration error: {0}")]
    Configuration(String),
}
