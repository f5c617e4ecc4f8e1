//! Model adapter for FloodSense.
//!
//! This crate owns the lifecycle of the generative model behind the engine:
//! - discovering the fine-tuned artifact, or falling back to the base model
//! - loading it once per process behind an acquire-once cell
//! - invoking it with the fixed decoding parameters
//! - classifying the result as answer, degenerate, unavailable or failed
//!
//! # Example
//! ```no_run
//! use floodsense_core::AppConfig;
//! use floodsense_llm::{ModelAdapter, GenerationOutcome};
//!
//! # async fn example() {
//! let adapter = ModelAdapter::from_config(&AppConfig::default());
//! let handle = adapter.load().await;
//! match adapter.generate(handle, "How high can the White Nile rise?").await {
//!     GenerationOutcome::Answer(text) => println!("{}", text),
//!     other => eprintln!("no answer: {:?}", other),
//! }
//! # }
//! ```

pub mod adapter;
pub mod artifact;
pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use adapter::ModelAdapter;
pub use artifact::{discover_source, is_complete_artifact};
pub use client::{GenerationRequest, GenerationResponse, TextGenerator};
pub use factory::{create_loader, ModelLoader};
pub use providers::OllamaGenerator;
pub use types::{GenerationOutcome, ModelHandle, ModelSource, ModelStatus};
