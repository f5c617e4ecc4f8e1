//! Model lifecycle and generation outcome types.

use crate::client::TextGenerator;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the model behind a handle came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModelSource {
    /// The fine-tuned artifact produced by the training pipeline
    FineTuned { path: PathBuf, model: String },

    /// The pre-trained base model of the same family
    Base { model: String },
}

impl ModelSource {
    /// Runtime name of the model to serve.
    pub fn model(&self) -> &str {
        match self {
            Self::FineTuned { model, .. } | Self::Base { model } => model,
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FineTuned { path, model } => {
                write!(f, "fine-tuned model '{}' from {}", model, path.display())
            }
            Self::Base { model } => write!(f, "base model '{}'", model),
        }
    }
}

/// A loaded model, or the record that loading failed.
///
/// Created once per process by [`crate::ModelAdapter::load`] and never
/// replaced afterwards.
#[derive(Clone)]
pub enum ModelHandle {
    Ready {
        source: ModelSource,
        generator: Arc<dyn TextGenerator>,
    },
    Unavailable {
        reason: String,
    },
}

impl ModelHandle {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready { source, generator } => f
                .debug_struct("Ready")
                .field("source", source)
                .field("generator", &generator.model_name())
                .finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Observable state of the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ModelStatus {
    NotLoaded,
    Ready { source: ModelSource },
    Unavailable { reason: String },
}

/// Result of asking the model for an answer.
///
/// Every variant is recoverable; the engine maps each one to a fixed
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Usable generated text
    Answer(String),

    /// No model could be loaded
    Unavailable,

    /// Output too short to be useful, or generation timed out
    Degenerate,

    /// The backend raised an error while generating
    Failed(String),
}
