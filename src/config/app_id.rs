//! Application identifier handling
//!
//! An application id names the app within a distribution platform's
//! namespace in reverse-domain form (`com.example.app`). Ids are lowercase
//! dot-separated segments; each segment starts with a letter and continues
//! with letters, digits or underscores. Once an app is published the id is
//! immutable, so the tool validates but never rewrites one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppshellError, Result};

/// Reverse-domain application identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Parse and validate an application id
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        Self::check(&value)?;
        Ok(Self(value))
    }

    /// Validate reverse-domain form without constructing an id
    ///
    /// Deserialization is transparent, so a manifest loaded from disk may
    /// hold an id this check rejects; `AppConfig::validate` funnels every
    /// id through here before the manifest is considered usable.
    pub fn check(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(invalid(value, "id cannot be empty"));
        }

        let segments: Vec<&str> = value.split('.').collect();
        if segments.len() < 2 {
            return Err(invalid(
                value,
                "id needs at least two dot-separated segments",
            ));
        }

        for segment in segments {
            if segment.is_empty() {
                return Err(invalid(value, "segments cannot be empty"));
            }

            let mut chars = segment.chars();
            // First char checked above for emptiness
            if let Some(first) = chars.next() {
                if !first.is_ascii_lowercase() {
                    return Err(invalid(
                        value,
                        "segments must start with a lowercase letter",
                    ));
                }
            }

            if let Some(bad) = segment
                .chars()
                .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && *c != '_')
            {
                let reason = if bad.is_ascii_uppercase() {
                    "segments must be lowercase".to_string()
                } else {
                    format!("segments cannot contain '{}'", bad)
                };
                return Err(invalid(value, reason));
            }
        }

        Ok(())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> AppshellError {
    AppshellError::InvalidAppId {
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        for id in [
            "com.example.app",
            "io.ionic.starter",
            "com.example.astrotailwind",
            "org.my_company.app2",
            "a.b",
        ] {
            let parsed = AppId::parse(id).unwrap();
            assert_eq!(parsed.as_str(), id);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(AppId::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        let err = AppId::parse("myapp").unwrap_err();
        assert!(err.to_string().contains("two dot-separated segments"));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(AppId::parse("com..app").is_err());
        assert!(AppId::parse(".com.app").is_err());
        assert!(AppId::parse("com.app.").is_err());
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        let err = AppId::parse("com.Example.app").unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn test_parse_rejects_leading_digit_segment() {
        assert!(AppId::parse("com.1example.app").is_err());
    }

    #[test]
    fn test_parse_rejects_hyphen() {
        let err = AppId::parse("com.my-company.app").unwrap_err();
        assert!(err.to_string().contains("'-'"));
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(AppId::parse("com.example .app").is_err());
        assert!(AppId::parse("com.example.my app").is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id: AppId = serde_json::from_str("\"com.example.app\"").unwrap();
        assert_eq!(id.as_str(), "com.example.app");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"com.example.app\""
        );
    }

    #[test]
    fn test_display() {
        let id = AppId::parse("com.example.app").unwrap();
        assert_eq!(format!("{}", id), "com.example.app");
    }
}
