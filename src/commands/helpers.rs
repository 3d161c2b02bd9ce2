//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::error::{AppshellError, Result};
use crate::project;

/// Resolve the directory a command starts from
///
/// The `--project` flag (or `APPSHELL_PROJECT`) wins; otherwise the
/// current working directory.
pub fn start_dir(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| AppshellError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// Resolve the project root owning the manifest, or fail
pub fn require_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let start = start_dir(project)?;

    project::detection::find_from(&start).ok_or_else(|| AppshellError::ProjectNotFound {
        path: start.display().to_string(),
    })
}
