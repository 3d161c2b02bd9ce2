//! Project manifest handling
//!
//! An appshell project is any directory containing `appshell.config.json`
//! at its root. This module locates project roots and loads/saves the
//! manifest they own.

pub mod config;
pub mod detection;

/// Manifest filename at the project root
pub const CONFIG_FILE: &str = "appshell.config.json";
