//! Error type for the terminal layer.
//!
//! Widgets never fail; only talking to the real terminal can.

use std::io;

/// Errors raised while driving the terminal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading events from or writing output to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The process could not be stopped for job control.
    #[error("failed to suspend process: {0}")]
    Suspend(String),
}

/// Result alias used by [`crate::terminal`].
pub type Result<T> = std::result::Result<T, Error>;
