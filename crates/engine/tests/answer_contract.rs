//! End-to-end behavior of `ResponseEngine::answer`.

use floodsense_core::{AppError, AppResult};
use floodsense_engine::responder::{CAPABILITY_MESSAGE, OUT_OF_DOMAIN_MESSAGE, REPHRASE_MESSAGE};
use floodsense_engine::rules::answers;
use floodsense_engine::ResponseEngine;
use floodsense_llm::{
    GenerationRequest, GenerationResponse, ModelAdapter, ModelLoader, ModelSource, TextGenerator,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records which source it was asked to load, then fails.
#[derive(Default)]
struct RefusingLoader {
    requested: Mutex<Vec<ModelSource>>,
}

#[async_trait::async_trait]
impl ModelLoader for RefusingLoader {
    async fn load(&self, source: &ModelSource) -> AppResult<Arc<dyn TextGenerator>> {
        self.requested.lock().unwrap().push(source.clone());
        Err(AppError::Model("no runtime".to_string()))
    }
}

/// Cycles through canned generations, some of them too short.
struct CyclingGenerator {
    outputs: Vec<&'static str>,
    next: AtomicUsize,
}

#[async_trait::async_trait]
impl TextGenerator for CyclingGenerator {
    fn model_name(&self) -> &str {
        "cycling"
    }

    async fn generate(&self, _request: &GenerationRequest) -> AppResult<GenerationResponse> {
        let i = self.next.fetch_add(1, Ordering::SeqCst) % self.outputs.len();
        Ok(GenerationResponse {
            text: self.outputs[i].to_string(),
            model: "cycling".to_string(),
            output_tokens: None,
        })
    }
}

struct CyclingLoader(Arc<CyclingGenerator>);

#[async_trait::async_trait]
impl ModelLoader for CyclingLoader {
    async fn load(&self, _source: &ModelSource) -> AppResult<Arc<dyn TextGenerator>> {
        Ok(self.0.clone())
    }
}

fn refusing_engine() -> (ResponseEngine, Arc<RefusingLoader>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RefusingLoader::default());
    let adapter = ModelAdapter::new(
        temp_dir.path().join("models/fine_tuned_t5"),
        "t5-small",
        loader.clone(),
    );
    (ResponseEngine::with_adapter(Arc::new(adapter)), loader, temp_dir)
}

#[tokio::test]
async fn empty_query_is_out_of_scope() {
    let (engine, _, _dir) = refusing_engine();
    assert_eq!(engine.answer("").await, OUT_OF_DOMAIN_MESSAGE);
}

#[tokio::test]
async fn hello_returns_greeting_verbatim() {
    let (engine, _, _dir) = refusing_engine();
    assert_eq!(
        engine.answer("hello").await,
        "Hello! I'm FloodSense, your assistant for flood information in South Sudan. How can I help you today?"
    );
}

#[tokio::test]
async fn bentiu_returns_static_figures() {
    let (engine, _, _dir) = refusing_engine();
    let answer = engine.answer("What is the flood risk in Bentiu?").await;
    assert!(answer.contains("High flood risk"));
    assert!(answer.contains("May to October"));
    assert!(answer.contains("120,000"));
}

#[tokio::test]
async fn regional_assessments_returns_full_block() {
    let (engine, _, _dir) = refusing_engine();
    for query in ["Regional Assessments", "regional assessments", "REGIONAL ASSESSMENTS"] {
        assert_eq!(engine.answer(query).await, answers::REGIONAL_ASSESSMENTS);
    }
}

#[tokio::test]
async fn absent_artifact_degrades_to_capability_summary() {
    let (engine, loader, _dir) = refusing_engine();

    let answer = engine
        .answer("Tell me about the water level in Akobo county")
        .await;
    assert!(!answer.is_empty());
    assert_eq!(answer, CAPABILITY_MESSAGE);

    // The missing artifact sends the loader to the base model.
    assert_eq!(
        loader.requested.lock().unwrap().as_slice(),
        [ModelSource::Base {
            model: "t5-small".to_string()
        }]
    );
}

#[tokio::test]
async fn rule_answers_are_stable_across_calls() {
    let (engine, _, _dir) = refusing_engine();
    for query in [
        "When is the flood season in South Sudan?",
        "How can I prepare for floods?",
        "jonglei",
    ] {
        assert_eq!(engine.answer(query).await, engine.answer(query).await);
    }
}

#[tokio::test]
async fn generated_answers_meet_minimum_length() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Arc::new(CyclingGenerator {
        outputs: vec![
            "Akobo county floods when the Pibor river overflows its banks.",
            "water",
            "",
            "Rainfall in Lakes state is heavy between July and September.",
        ],
        next: AtomicUsize::new(0),
    });
    let adapter = ModelAdapter::new(
        temp_dir.path().join("models/fine_tuned_t5"),
        "t5-small",
        Arc::new(CyclingLoader(generator)),
    );
    let engine = ResponseEngine::with_adapter(Arc::new(adapter));

    for _ in 0..8 {
        let answer = engine
            .answer("Tell me about the water level in Akobo county")
            .await;
        assert!(answer == REPHRASE_MESSAGE || answer.split_whitespace().count() >= 5);
    }
}
