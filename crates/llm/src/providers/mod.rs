//! Generation backends.

pub mod ollama;

pub use ollama::OllamaGenerator;
