//! Configuration file handling for Appshell
//!
//! This module contains data structures for the project manifest:
//! - `appshell.config.json` - Application shell configuration
//!
//! The manifest carries exactly three fields: `appId`, `appName` and
//! `webDir`. Parsing is strict (unknown keys are rejected) and
//! serialization is canonical, so a valid manifest round-trips unchanged.

pub mod app;
pub mod app_id;
pub mod web_dir;

// Re-export commonly used types
pub use app::AppConfig;
pub use app_id::AppId;
pub use web_dir::WebDir;
