//! FloodSense Core Library
//!
//! This crate provides the foundational utilities shared by the FloodSense crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (workspace, model artifact, generation runtime)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ModelConfig};
pub use error::{AppError, AppResult};
