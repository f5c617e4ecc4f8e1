//! Ollama-backed generation runtime.
//!
//! The model artifact is served by a local Ollama instance.
//! Ollama API: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::client::{GenerationRequest, GenerationResponse, TextGenerator};
use floodsense_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ollama `/api/generate` request body.
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

/// Decoding options understood by Ollama.
///
/// Beam search has no Ollama counterpart; `beam_count` is not sent.
/// Neither is `no_repeat_ngram_size`: Ollama's `repeat_last_n` is a
/// look-back window for a repeat penalty, not an n-gram ban.
#[derive(Debug, Serialize)]
struct OllamaOptions {
    num_predict: u32,
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

/// Ollama `/api/generate` response body.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    model: String,
    response: String,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Ollama `/api/show` request body.
#[derive(Debug, Serialize)]
struct ShowRequest<'a> {
    model: &'a str,
}

/// Generator serving one named model from an Ollama instance.
pub struct OllamaGenerator {
    /// Base URL for Ollama API
    base_url: String,

    /// Model served by this generator
    model: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OllamaGenerator {
    /// Create a generator for `model` on the Ollama instance at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Check that the runtime is reachable and knows the model.
    pub async fn ensure_available(&self) -> AppResult<()> {
        let url = format!("{}/api/show", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ShowRequest { model: &self.model })
            .send()
            .await
            .map_err(|e| AppError::Model(format!("Failed to reach Ollama at {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Model(format!(
                "Model '{}' is not available on Ollama ({})",
                self.model,
                response.status()
            )));
        }

        Ok(())
    }

    fn to_ollama_request(&self, request: &GenerationRequest) -> OllamaRequest {
        OllamaRequest {
            model: self.model.clone(),
            prompt: request.prompt.clone(),
            stream: false,
            options: OllamaOptions {
                num_predict: request.max_output_length,
                temperature: if request.do_sample {
                    request.temperature
                } else {
                    0.0
                },
                top_k: request.top_k,
                top_p: request.top_p,
            },
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for OllamaGenerator {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResponse> {
        tracing::debug!("Request: {:?}", request);

        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&self.to_ollama_request(request))
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to send request to Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Generation(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse Ollama response: {}", e)))?;

        Ok(GenerationResponse {
            text: body.response.trim().to_string(),
            model: body.model,
            output_tokens: body.eval_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let generator = OllamaGenerator::with_base_url("http://localhost:11434/", "t5-small");
        assert_eq!(generator.model_name(), "t5-small");
        assert_eq!(generator.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_request_conversion() {
        let generator = OllamaGenerator::with_base_url("http://localhost:11434", "floodsense-t5");
        let request = GenerationRequest::new("question: is Bor at risk?");

        let body = generator.to_ollama_request(&request);
        assert_eq!(body.model, "floodsense-t5");
        assert_eq!(body.prompt, "question: is Bor at risk?");
        assert!(!body.stream);
        assert_eq!(body.options.num_predict, 150);
        assert_eq!(body.options.top_k, 50);
        assert_eq!(body.options.top_p, 0.95);

        let json = serde_json::to_value(&body).unwrap();
        assert!(json["options"].get("repeat_last_n").is_none());
    }

    #[test]
    fn test_greedy_request_zeroes_temperature() {
        let generator = OllamaGenerator::with_base_url("http://localhost:11434", "t5-small");
        let mut request = GenerationRequest::new("question: rain");
        request.do_sample = false;

        assert_eq!(generator.to_ollama_request(&request).options.temperature, 0.0);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"model":"t5-small","response":" Floods peak in August. ","done":true,"eval_count":7}"#;
        let body: OllamaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.response.trim(), "Floods peak in August.");
        assert_eq!(body.eval_count, Some(7));
    }
}
