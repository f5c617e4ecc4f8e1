//! Instruction templates for the FloodSense generative model.
//!
//! The fine-tuned model was trained on inputs of the form `question: <query>`.
//! This crate owns that input format:
//! - YAML-based template definitions (`.floodsense/prompts/<id>.yml`)
//! - A built-in default matching the training format
//! - Handlebars rendering of the user query into the template

pub mod builder;
pub mod loader;
pub mod types;

// Re-export main types
pub use builder::render_instruction;
pub use loader::{load_or_default, load_template};
pub use types::{InstructionTemplate, DEFAULT_TEMPLATE_ID};
