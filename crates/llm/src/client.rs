//! Generation request/response types and the backend abstraction.

use floodsense_core::AppResult;
use serde::{Deserialize, Serialize};

/// Decoding parameters for one generation call.
///
/// The defaults are the values the fine-tuned artifact was evaluated with;
/// the engine never lets users adjust them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fully formatted model input
    pub prompt: String,

    /// Maximum number of output tokens
    pub max_output_length: u32,

    /// Maximum number of input tokens; longer prompts are truncated
    pub max_input_length: usize,

    /// Beam search width
    pub beam_count: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Window within which n-grams may not repeat
    pub no_repeat_ngram_size: u32,

    /// Top-k sampling cutoff
    pub top_k: u32,

    /// Top-p nucleus sampling
    pub top_p: f32,

    /// Sample instead of greedy decoding
    pub do_sample: bool,

    /// Stop beams as soon as every beam has finished
    pub early_stopping: bool,
}

impl GenerationRequest {
    /// Create a request with the fixed decoding parameters.
    ///
    /// The prompt is cut to `max_input_length` whitespace-separated tokens.
    pub fn new(prompt: impl Into<String>) -> Self {
        let mut request = Self {
            prompt: prompt.into(),
            max_output_length: 150,
            max_input_length: 512,
            beam_count: 4,
            temperature: 0.7,
            no_repeat_ngram_size: 2,
            top_k: 50,
            top_p: 0.95,
            do_sample: true,
            early_stopping: true,
        };
        request.truncate_prompt();
        request
    }

    fn truncate_prompt(&mut self) {
        let tokens: Vec<&str> = self.prompt.split_whitespace().collect();
        if tokens.len() > self.max_input_length {
            tracing::debug!(
                "Truncating prompt from {} to {} tokens",
                tokens.len(),
                self.max_input_length
            );
            self.prompt = tokens[..self.max_input_length].join(" ");
        }
    }
}

/// Decoded output of one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The decoded text, special tokens stripped
    pub text: String,

    /// Model that produced the text
    pub model: String,

    /// Tokens generated, when the backend reports it
    #[serde(default)]
    pub output_tokens: Option<u32>,
}

impl GenerationResponse {
    /// Number of whitespace-separated words in the decoded text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A loaded generative model.
///
/// Implementations must not mutate shared state while generating; the
/// adapter may call `generate` from several tasks at once.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name of the model serving requests.
    fn model_name(&self) -> &str;

    /// Run one bounded-length generation.
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResponse>;
}
