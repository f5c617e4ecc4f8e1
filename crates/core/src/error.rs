//! Error types for FloodSense.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! model loading, generation, prompt and serialization failures.
//!
//! These are internal errors. The query-answering surface never hands them to
//! its caller: the engine converts every failure into a user-facing message.

use thiserror::Error;

/// Unified error type for FloodSense.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model artifact discovery and loading errors
    #[error("Model error: {0}")]
    Model(String),

    /// Errors raised while the generative model produces text
    #[error("Generation error: {0}")]
    Generation(String),

    /// Instruction template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
