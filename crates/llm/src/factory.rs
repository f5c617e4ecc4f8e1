//! Model loader factory.
//!
//! A loader turns a [`ModelSource`] into a ready [`TextGenerator`]. The
//! adapter calls it at most once per process.

use crate::client::TextGenerator;
use crate::providers::OllamaGenerator;
use crate::types::ModelSource;
use floodsense_core::AppResult;
use std::sync::Arc;

/// Loads the generative model for a source.
#[async_trait::async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load the model, failing if it cannot serve requests.
    async fn load(&self, source: &ModelSource) -> AppResult<Arc<dyn TextGenerator>>;
}

/// Loader that serves models from an Ollama instance.
pub struct OllamaLoader {
    endpoint: String,
}

impl OllamaLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait::async_trait]
impl ModelLoader for OllamaLoader {
    async fn load(&self, source: &ModelSource) -> AppResult<Arc<dyn TextGenerator>> {
        let generator = OllamaGenerator::with_base_url(&self.endpoint, source.model());
        generator.ensure_available().await?;
        Ok(Arc::new(generator))
    }
}

/// Create the default loader for a runtime endpoint.
pub fn create_loader(endpoint: &str) -> Arc<dyn ModelLoader> {
    Arc::new(OllamaLoader::new(endpoint))
}
