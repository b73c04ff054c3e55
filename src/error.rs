// src/error.rs

//! Unified error handling for the planner.

use std::fmt;

use thiserror::Error;

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Shift name does not follow `<prefix><type><2 digits>`
    #[error("Unexpected shift name - {name}")]
    ShiftName { name: String },

    /// Lesson timestamp could not be split or parsed
    #[error("Invalid lesson timestamp '{value}': {message}")]
    Timestamp { value: String, message: String },

    /// Color is not a `#rrggbb` hex string
    #[error("Invalid color '{0}'")]
    Color(String),

    /// Malformed schedule identifier
    #[error("Invalid schedule identifier: {0}")]
    ScheduleId(String),

    /// Catalog API returned an unusable response
    #[error("Catalog error for {context}: {message}")]
    Catalog { context: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a timestamp error.
    pub fn timestamp(value: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Timestamp {
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create a catalog error with context.
    pub fn catalog(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Catalog {
            context: context.into(),
            message: message.to_string(),
        }
    }
}
