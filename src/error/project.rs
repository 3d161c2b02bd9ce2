//! Project discovery and doctor errors

use super::AppshellError;

/// Creates a project not found error
pub fn not_found(path: impl Into<String>) -> AppshellError {
    AppshellError::ProjectNotFound { path: path.into() }
}

/// Creates a web directory missing error
pub fn web_dir_missing(path: impl Into<String>) -> AppshellError {
    AppshellError::WebDirMissing { path: path.into() }
}

/// Creates a checks failed error
pub fn checks_failed(count: usize) -> AppshellError {
    AppshellError::ChecksFailed { count }
}
