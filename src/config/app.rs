//! Application shell configuration (appshell.config.json) data structures
//!
//! The manifest is the contract between an app project and the packaging
//! tooling: which id the app carries on distribution platforms, what name
//! it shows on device home screens, and where the pre-built web assets
//! live. Serialization keys are camelCase to match the on-disk format.

use serde::{Deserialize, Serialize};

use crate::config::{AppId, WebDir};
use crate::error::{AppshellError, Result};

/// Application shell configuration (appshell.config.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    /// Reverse-domain application identifier
    pub app_id: AppId,

    /// Display name shown on device home screens
    pub app_name: String,

    /// Directory of pre-built web assets, relative to the project root
    pub web_dir: WebDir,
}

impl AppConfig {
    /// Create a new configuration, validating every field
    pub fn new(
        app_id: impl Into<String>,
        app_name: impl Into<String>,
        web_dir: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            app_id: AppId::parse(app_id)?,
            app_name: app_name.into(),
            web_dir: WebDir::parse(web_dir)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string
    ///
    /// Strict: unknown keys and missing fields are errors. Field-level
    /// invariants are checked separately by [`AppConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize configuration to its canonical JSON form
    ///
    /// Pretty-printed, keys in declaration order, trailing newline.
    /// `from_json` of the output yields an identical configuration.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Validate the configuration fields
    pub fn validate(&self) -> Result<()> {
        AppId::check(self.app_id.as_str())?;

        if self.app_name.trim().is_empty() {
            return Err(AppshellError::ConfigInvalid {
                message: "appName cannot be empty".to_string(),
            });
        }

        WebDir::check(self.web_dir.as_str())?;

        Ok(())
    }
}
