//! Instruction template types.

use serde::{Deserialize, Serialize};

/// Identifier of the template the engine uses for generation.
pub const DEFAULT_TEMPLATE_ID: &str = "floodsense.question";

/// A template that turns a raw user query into model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionTemplate {
    /// Unique template identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// API version for schema evolution
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Handlebars template; `{{query}}` receives the user text
    pub template: String,
}

impl Default for InstructionTemplate {
    /// The format the fine-tuned artifact was trained on.
    fn default() -> Self {
        Self {
            id: DEFAULT_TEMPLATE_ID.to_string(),
            title: "Flood risk question".to_string(),
            api_version: "1.0".to_string(),
            template: "question: {{query}}".to_string(),
        }
    }
}
