//! Error types for vigilctl
//!
//! Structured errors organized by functional domain, with constructor
//! helpers and conversions from the library errors we sit on top of.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // CLI errors
    #[error("Missing required option: --{option}")]
    MissingOption { option: String },

    #[error("Invalid value '{value}' for option --{option} (allowed: {allowed})")]
    InvalidOption {
        option: String,
        value: String,
        allowed: String,
    },

    #[error("Duplicate command name registered: {name}")]
    DuplicateCommand { name: String },

    #[error("No API key configured. Pass --x_api_key, set VIGIL_API_KEY, or add one to the config file")]
    MissingApiKey,

    // Network and API errors
    #[error("HTTP request failed: {method} {url}")]
    HttpRequest {
        method: String,
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Network timeout talking to {url}")]
    NetworkTimeout { url: String },

    #[error("API returned HTTP {status} for {method} {path}: {body}")]
    Api {
        status: u16,
        method: String,
        path: String,
        body: String,
    },

    #[error("Unexpected response payload from {path}: {reason}")]
    Payload {
        path: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // I/O errors
    #[error("File I/O error for '{path}': {operation}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Parsing errors
    #[error("Parse error for '{input}': expected {expected}")]
    Parse {
        input: String,
        expected: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Convenience type alias for Results using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn missing_option(option: impl Into<String>) -> Self {
        Self::MissingOption {
            option: option.into(),
        }
    }

    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidOption {
            option: option.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn payload(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Payload {
            path: path.into(),
            reason: reason.into(),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::MissingOption { .. }
            | Self::InvalidOption { .. }
            | Self::DuplicateCommand { .. }
            | Self::MissingApiKey => "cli",
            Self::HttpRequest { .. } | Self::NetworkTimeout { .. } | Self::Api { .. } => "network",
            Self::Payload { .. } | Self::Parse { .. } => "payload",
            Self::Io { .. } => "io",
            Self::Internal { .. } => "internal",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let operation = match err.kind() {
            std::io::ErrorKind::NotFound => "file not found",
            std::io::ErrorKind::PermissionDenied => "permission denied",
            std::io::ErrorKind::TimedOut => "timeout",
            _ => "I/O operation",
        }
        .to_string();

        Self::Io {
            path: PathBuf::from("unknown"),
            operation,
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        if err.is_timeout() {
            Self::NetworkTimeout { url }
        } else {
            Self::HttpRequest {
                method: "UNKNOWN".to_string(),
                url,
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: format!("Failed to parse config file: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload {
            path: "unknown".to_string(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::Parse {
            input: "URL".to_string(),
            expected: "valid URL".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::missing_option("policy_id");
        assert_eq!(err.to_string(), "Missing required option: --policy_id");

        let err = AppError::invalid_option("priority", "urgent", &["critical", "warning"]);
        assert_eq!(
            err.to_string(),
            "Invalid value 'urgent' for option --priority (allowed: critical, warning)"
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(AppError::config("x").category(), "config");
        assert_eq!(AppError::missing_option("id").category(), "cli");
        assert_eq!(
            AppError::Api {
                status: 500,
                method: "GET".into(),
                path: "/servers".into(),
                body: String::new(),
            }
            .category(),
            "network"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let app_err: AppError = io_err.into();
        match app_err {
            AppError::Io { operation, .. } => assert_eq!(operation, "file not found"),
            other => panic!("wrong error type: {other:?}"),
        }
    }
}
