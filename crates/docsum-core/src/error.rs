//! Error types module
//!
//! All errors that reach an invocation boundary are unified under `AppError`.
//! Transport crates keep their own error types and convert into `AppError`
//! at the boundary.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing upload field
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Unknown event type")]
    UnknownEventType,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::BadRequest(_) => (400, "BAD_REQUEST", LogLevel::Debug),
        AppError::UnknownEventType => (400, "UNKNOWN_EVENT_TYPE", LogLevel::Warn),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Warn),
        AppError::Configuration(_) => (500, "CONFIGURATION_ERROR", LogLevel::Error),
        AppError::UploadFailed(_) => (500, "UPLOAD_FAILED", LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Database(_) => (500, "DATABASE_ERROR", LogLevel::Error),
        AppError::ExternalService(_) => (502, "EXTERNAL_SERVICE_ERROR", LogLevel::Error),
        AppError::UnsupportedFileType(_) => (415, "UNSUPPORTED_FILE_TYPE", LogLevel::Warn),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", LogLevel::Error)
        }
    }
}

impl AppError {
    /// Get the error type name for log lines
    pub fn error_type(&self) -> &str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Configuration(_) => "Configuration",
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::Storage(_) => "Storage",
            AppError::Database(_) => "Database",
            AppError::ExternalService(_) => "ExternalService",
            AppError::UnsupportedFileType(_) => "UnsupportedFileType",
            AppError::UnknownEventType => "UnknownEventType",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(_) => "Document exceeds the maximum upload size.".to_string(),
            AppError::Configuration(_) => "Server configuration error.".to_string(),
            AppError::UploadFailed(_) => "Failed to upload document.".to_string(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Database(_) => "Failed to access result store".to_string(),
            AppError::ExternalService(_) => "Upstream service error".to_string(),
            AppError::UnsupportedFileType(ref filename) => {
                format!("Unsupported file type: {}", filename)
            }
            AppError::UnknownEventType => "Unknown event type".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal Server Error".to_string()
            }
        }
    }
}
