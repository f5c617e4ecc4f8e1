//! The model adapter: lazy load, fallback, bounded generation.

use crate::artifact::discover_source;
use crate::client::{GenerationRequest, TextGenerator};
use crate::factory::{create_loader, ModelLoader};
use crate::types::{GenerationOutcome, ModelHandle, ModelStatus};
use floodsense_core::AppConfig;
use floodsense_prompt::{render_instruction, InstructionTemplate};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};

/// Outputs with fewer words than this are treated as degenerate.
pub const MIN_ANSWER_WORDS: usize = 5;

/// Owns the generative model for the lifetime of the process.
///
/// The handle is initialized on the first [`load`](Self::load) and never
/// replaced; concurrent first callers wait on the same initialization.
pub struct ModelAdapter {
    model_dir: PathBuf,
    base_model: String,
    loader: Arc<dyn ModelLoader>,
    template: InstructionTemplate,
    timeout: Duration,
    handle: OnceCell<ModelHandle>,
    /// Present when generation calls must run one at a time.
    generation_lock: Option<Mutex<()>>,
}

impl ModelAdapter {
    /// Create an adapter with an explicit loader.
    pub fn new(
        model_dir: impl Into<PathBuf>,
        base_model: impl Into<String>,
        loader: Arc<dyn ModelLoader>,
    ) -> Self {
        Self {
            model_dir: model_dir.into(),
            base_model: base_model.into(),
            loader,
            template: InstructionTemplate::default(),
            timeout: Duration::from_secs(30),
            handle: OnceCell::new(),
            generation_lock: Some(Mutex::new(())),
        }
    }

    /// Create an Ollama-backed adapter from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let model = &config.model;

        Self::new(
            config.resolved_model_dir(),
            &model.base_model,
            create_loader(&model.endpoint),
        )
        .with_timeout(Duration::from_secs(model.timeout_secs))
        .with_serialized_generation(model.serialize_generation)
    }

    /// Use a custom instruction template.
    pub fn with_template(mut self, template: InstructionTemplate) -> Self {
        self.template = template;
        self
    }

    /// Bound each generation call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Serialize generation calls behind a lock, or let them run concurrently.
    pub fn with_serialized_generation(mut self, serialize: bool) -> Self {
        self.generation_lock = serialize.then(|| Mutex::new(()));
        self
    }

    /// Load the model on first use and return the shared handle.
    ///
    /// Never fails: any loading error is recorded as
    /// [`ModelHandle::Unavailable`].
    pub async fn load(&self) -> &ModelHandle {
        self.handle.get_or_init(|| self.load_handle()).await
    }

    async fn load_handle(&self) -> ModelHandle {
        let source = match discover_source(&self.model_dir, &self.base_model) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!("Error loading model: {}", e);
                tracing::info!("Falling back to rule-based responses only");
                return ModelHandle::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        tracing::info!("Loading {}", source);

        match self.loader.load(&source).await {
            Ok(generator) => {
                tracing::info!("Model loaded successfully");
                ModelHandle::Ready { source, generator }
            }
            Err(e) => {
                tracing::error!("Error loading model: {}", e);
                tracing::info!("Falling back to rule-based responses only");
                ModelHandle::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Current lifecycle state, without triggering a load.
    pub fn status(&self) -> ModelStatus {
        match self.handle.get() {
            None => ModelStatus::NotLoaded,
            Some(ModelHandle::Ready { source, .. }) => ModelStatus::Ready {
                source: source.clone(),
            },
            Some(ModelHandle::Unavailable { reason }) => ModelStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// Generate an answer for `query` with a loaded handle.
    ///
    /// Never fails. Short output and timeouts become
    /// [`GenerationOutcome::Degenerate`]; backend errors become
    /// [`GenerationOutcome::Failed`].
    pub async fn generate(&self, handle: &ModelHandle, query: &str) -> GenerationOutcome {
        let generator = match handle {
            ModelHandle::Ready { generator, .. } => generator.as_ref(),
            ModelHandle::Unavailable { .. } => return GenerationOutcome::Unavailable,
        };

        let prompt = match render_instruction(&self.template, query) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("Error generating response: {}", e);
                return GenerationOutcome::Failed(e.to_string());
            }
        };

        let request = GenerationRequest::new(prompt);

        // Queue time behind the lock does not count against the timeout.
        let _guard = match &self.generation_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        match tokio::time::timeout(self.timeout, generator.generate(&request)).await {
            Err(_) => {
                tracing::warn!(
                    "Generation timed out after {:?} for query: '{}'",
                    self.timeout,
                    query
                );
                GenerationOutcome::Degenerate
            }
            Ok(Err(e)) => {
                tracing::error!("Error generating response: {}", e);
                GenerationOutcome::Failed(e.to_string())
            }
            Ok(Ok(response)) if response.word_count() < MIN_ANSWER_WORDS => {
                tracing::debug!("Discarding degenerate output: '{}'", response.text);
                GenerationOutcome::Degenerate
            }
            Ok(Ok(response)) => {
                tracing::info!("Generated response for query: '{}'", query);
                GenerationOutcome::Answer(response.text)
            }
        }
    }
}
