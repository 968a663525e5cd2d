//! Sdksweep - checkout cleanup for SDK-based OS development trees
//!
//! This library backs the `sdksweep` binary, which removes build-generated
//! files and caches from a development checkout: the SDK chroot, per-board
//! build roots, package caches, build logs, incremental build objects, and
//! locally generated images.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Option resolution, checkout layout, and the cleaning pass
//! - [`infra`] - Infrastructure layer (filesystem, SDK chroot processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
