//! Error types for sdksweep
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to remove a directory tree
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Glob pattern could not be parsed or expanded
    #[error("Failed to expand pattern '{pattern}': {error}")]
    Glob { pattern: String, error: String },
}

/// SDK chroot errors
#[derive(Error, Debug)]
pub enum ChrootError {
    /// Running inside the chroot that is being managed
    #[error("sdksweep must be run outside the SDK chroot")]
    InsideChroot,

    /// The SDK management command is not installed
    #[error("SDK command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    /// The SDK management command could not be spawned
    #[error("Failed to run '{command}': {error}")]
    Spawn { command: String, error: String },

    /// The SDK management command reported failure
    #[error("'{command} --delete' failed: {status}")]
    DeleteFailed { command: String, status: String },
}

/// Top-level sdksweep error type
#[derive(Error, Debug)]
pub enum CleanError {
    /// Chroot error
    #[error("Chroot error: {0}")]
    Chroot(#[from] ChrootError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// No checkout root could be located
    #[error(
        "No checkout root found above '{start}'. \
         Pass --source-root or set SDKSWEEP_SOURCE_ROOT."
    )]
    CheckoutNotFound { start: PathBuf },
}
