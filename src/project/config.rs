//! Project manifest loading and saving

use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::{AppshellError, Result};

use super::CONFIG_FILE;

/// Load the manifest from a project root
pub fn load_app_config(root: &Path) -> Result<AppConfig> {
    let path = root.join(CONFIG_FILE);

    if !path.is_file() {
        return Err(AppshellError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|e| AppshellError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| AppshellError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Save the manifest to a project root
///
/// Uses an atomic write (temp file + rename) so that readers never observe
/// a partially written manifest.
pub fn save_app_config(root: &Path, config: &AppConfig) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    let content = config.to_json()?;

    let tmp_path = root.join(format!("{}.tmp", CONFIG_FILE));

    fs::write(&tmp_path, &content).map_err(|e| AppshellError::FileWriteFailed {
        path: tmp_path.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::rename(&tmp_path, &path).map_err(|e| AppshellError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
