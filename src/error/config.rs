//! Configuration errors

use super::AppshellError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> AppshellError {
    AppshellError::ConfigNotFound { path: path.into() }
}

/// Creates a config already exists error
pub fn already_exists(path: impl Into<String>) -> AppshellError {
    AppshellError::ConfigAlreadyExists { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppshellError {
    AppshellError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppshellError {
    AppshellError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AppshellError {
    AppshellError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid application id error
pub fn invalid_app_id(value: impl Into<String>, reason: impl Into<String>) -> AppshellError {
    AppshellError::InvalidAppId {
        value: value.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid web directory error
pub fn invalid_web_dir(value: impl Into<String>, reason: impl Into<String>) -> AppshellError {
    AppshellError::InvalidWebDir {
        value: value.into(),
        reason: reason.into(),
    }
}
