//! Error types and handling for Appshell
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Manifest errors (missing, unparseable, invalid fields)
//! - [`project`]: Project discovery and doctor errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod config;
pub mod fs;
pub mod project;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use config::{
    already_exists as config_already_exists, invalid as config_invalid,
    invalid_app_id, invalid_web_dir, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use project::{
    checks_failed, not_found as project_not_found, web_dir_missing,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Appshell operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppshellError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(appshell::config::not_found),
        help("Run 'appshell init' to create appshell.config.json")
    )]
    ConfigNotFound { path: String },

    #[error("Configuration file already exists: {path}")]
    #[diagnostic(
        code(appshell::config::already_exists),
        help("Edit appshell.config.json directly, or remove it before re-running init")
    )]
    ConfigAlreadyExists { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(appshell::config::parse_failed),
        help("The manifest must contain exactly appId, appName and webDir as strings")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appshell::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appshell::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid application id '{value}': {reason}")]
    #[diagnostic(
        code(appshell::config::invalid_app_id),
        help("Application ids use reverse-domain form: lowercase dot-separated segments, e.g. com.example.app")
    )]
    InvalidAppId { value: String, reason: String },

    #[error("Invalid web directory '{value}': {reason}")]
    #[diagnostic(
        code(appshell::config::invalid_web_dir),
        help("webDir is a path relative to the project root, e.g. dist or www")
    )]
    InvalidWebDir { value: String, reason: String },

    // Project errors
    #[error("No appshell project found from: {path}")]
    #[diagnostic(
        code(appshell::project::not_found),
        help(
            "Run from inside an app project containing appshell.config.json, or pass --project. 'appshell init' creates a new manifest."
        )
    )]
    ProjectNotFound { path: String },

    #[error("Web directory does not exist: {path}")]
    #[diagnostic(
        code(appshell::project::web_dir_missing),
        help("Build your web assets first, or point webDir at the build output directory")
    )]
    WebDirMissing { path: String },

    #[error("{count} check(s) failed")]
    #[diagnostic(
        code(appshell::project::checks_failed),
        help("Fix the issues reported above and run 'appshell doctor' again")
    )]
    ChecksFailed { count: usize },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(appshell::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appshell::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AppshellError {
    fn from(err: std::io::Error) -> Self {
        AppshellError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppshellError {
    fn from(err: serde_json::Error) -> Self {
        AppshellError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AppshellError {
    fn from(err: inquire::InquireError) -> Self {
        AppshellError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppshellError>;
