//! Path normalization utilities
//!
//! Centralized path handling used by the configuration model and the
//! `validate`/`doctor` commands, so manifest paths and report output stay
//! consistent across platforms.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Convert a path string to forward slashes
///
/// The manifest stores `webDir` with forward slashes regardless of the
/// platform it was written on.
pub fn to_forward_slashes(value: &str) -> String {
    value.replace('\\', "/")
}

/// Normalize a path (canonicalize with Windows path handling)
///
/// For non-existent paths, normalizes the longest existing ancestor and
/// appends the remaining components, so symlinked roots (e.g. /var ->
/// /private/var on macOS) resolve the same way whether or not the leaf
/// exists yet.
pub fn normalize(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return norm.into_path_buf();
    }

    let mut current = path;
    let mut components = Vec::new();

    while !current.exists() {
        if let Some(file_name) = current.file_name() {
            components.push(file_name.to_os_string());
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                return path.to_path_buf();
            }
        } else {
            return path.to_path_buf();
        }
    }

    let normalized_base = current
        .normalize()
        .map(|norm| norm.into_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());

    let mut result = normalized_base;
    for component in components.iter().rev() {
        result = result.join(component);
    }

    result
}

/// Render a path for terminal output
///
/// Strips Windows verbatim prefixes (`\\?\`) that canonicalization
/// introduces.
pub fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}
