//! Project detection utilities
//!
//! This module provides functions for locating the appshell project root
//! that owns the manifest for a given starting directory.

use std::path::{Path, PathBuf};

use super::CONFIG_FILE;

/// Detect if a project manifest exists at the given path
pub fn exists(root: &Path) -> bool {
    root.join(CONFIG_FILE).is_file()
}

/// Find the project root owning a manifest, starting from `start`
///
/// Walks up the directory tree and returns the first ancestor containing
/// `appshell.config.json`. Returns `None` when no ancestor has one.
pub fn find_from(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if exists(dir) {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }

    None
}
