//! File system errors

use super::AppshellError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AppshellError {
    AppshellError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AppshellError {
    AppshellError::IoError {
        message: message.into(),
    }
}
