//! Core logic module
//!
//! This module contains the logic behind the clean operation.
//!
//! # Submodules
//!
//! - [`options`] - Flag resolution into a frozen option set
//! - [`layout`] - Checkout layout and path construction
//! - [`clean`] - The cleaning pass over enabled options

pub mod clean;
pub mod layout;
pub mod options;
