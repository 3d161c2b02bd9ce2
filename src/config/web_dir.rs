//! Web asset directory handling
//!
//! `webDir` points at the directory of pre-built static content that the
//! packaging step embeds into the native shell. It is always a path
//! relative to the project root, stored with forward slashes. Whether the
//! directory exists on disk is a packaging-time property checked by
//! `validate` and `doctor`, not by parsing.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::paths;
use crate::error::{AppshellError, Result};

/// Relative path to the directory of pre-built web assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebDir(String);

impl WebDir {
    /// Parse and validate a web directory path
    ///
    /// Normalizes backslashes to forward slashes and strips a leading
    /// `./` and any trailing slash before validating.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let mut normalized = paths::to_forward_slashes(raw.trim());

        while let Some(stripped) = normalized.strip_prefix("./") {
            normalized = stripped.to_string();
        }
        while normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }

        Self::check(&normalized)?;
        Ok(Self(normalized))
    }

    /// Validate relative-path invariants without constructing a value
    ///
    /// Like `AppId`, deserialization is transparent; `AppConfig::validate`
    /// funnels manifest values through here.
    pub fn check(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(invalid(value, "path cannot be empty"));
        }

        if value.starts_with('/') || Path::new(value).is_absolute() {
            return Err(invalid(value, "must be a relative path"));
        }

        if value.contains('\\') {
            return Err(invalid(value, "use forward slashes"));
        }

        if Path::new(value)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(invalid(value, "cannot point outside the project"));
        }

        Ok(())
    }

    /// Resolve the directory against a project root
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> AppshellError {
    AppshellError::InvalidWebDir {
        value: value.to_string(),
        reason: reason.into(),
    }
}
