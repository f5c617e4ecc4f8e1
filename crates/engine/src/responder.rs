//! Response engine: gate, rules, then the generative model.

use crate::gate::DomainGate;
use crate::rules::{RuleCategory, RuleTable};
use floodsense_llm::{GenerationOutcome, ModelAdapter};
use serde::Serialize;
use std::sync::Arc;

pub const OUT_OF_DOMAIN_MESSAGE: &str = "I'm sorry, I'm specialized in flood risk information for South Sudan. I don't have information about that topic. Could you ask me something about flood risks, preparation, or safety in South Sudan?";

pub const CAPABILITY_MESSAGE: &str = "I can help with flood information in South Sudan. Please ask about specific regions (Bentiu, Bor, Malakal, Juba), flood preparation, safety measures, or seasonal patterns.";

pub const REPHRASE_MESSAGE: &str = "I'm still learning about flood risks in South Sudan. Could you please rephrase your question or ask about flood preparation, safety, or specific regions?";

pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I encountered an error while processing your question.";

/// Which layer produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnswerSource {
    OutOfDomain,
    Rule { name: String, category: RuleCategory },
    Model,
    ModelUnavailable,
    Degenerate,
    GenerationFailed { reason: String },
}

/// Final text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub text: String,
    pub source: AnswerSource,
}

impl Response {
    fn fixed(text: &str, source: AnswerSource) -> Self {
        Self {
            text: text.to_string(),
            source,
        }
    }
}

/// Orchestrates the domain gate, the rule table and the model adapter.
///
/// Holds no per-request state; the only shared state is the adapter's
/// memoized model handle.
pub struct ResponseEngine {
    gate: DomainGate,
    rules: RuleTable,
    adapter: Arc<ModelAdapter>,
}

impl ResponseEngine {
    pub fn new(gate: DomainGate, rules: RuleTable, adapter: Arc<ModelAdapter>) -> Self {
        Self {
            gate,
            rules,
            adapter,
        }
    }

    /// Engine with the built-in keyword sets and rule table.
    pub fn with_adapter(adapter: Arc<ModelAdapter>) -> Self {
        Self::new(DomainGate::default(), RuleTable::default(), adapter)
    }

    pub fn adapter(&self) -> &ModelAdapter {
        &self.adapter
    }

    /// Answer `query`. Never fails.
    pub async fn answer(&self, query: &str) -> String {
        self.respond(query).await.text
    }

    /// Answer `query` and report which layer answered.
    pub async fn respond(&self, query: &str) -> Response {
        if !self.gate.is_in_domain(query) {
            tracing::debug!("Query out of domain: '{}'", query);
            return Response::fixed(OUT_OF_DOMAIN_MESSAGE, AnswerSource::OutOfDomain);
        }

        if let Some(rule) = self.rules.find(query) {
            return Response {
                text: rule.answer.clone(),
                source: AnswerSource::Rule {
                    name: rule.name.clone(),
                    category: rule.category,
                },
            };
        }

        let handle = self.adapter.load().await;
        if !handle.is_ready() {
            return Response::fixed(CAPABILITY_MESSAGE, AnswerSource::ModelUnavailable);
        }

        match self.adapter.generate(handle, query).await {
            GenerationOutcome::Answer(text) => Response {
                text,
                source: AnswerSource::Model,
            },
            GenerationOutcome::Unavailable => {
                Response::fixed(CAPABILITY_MESSAGE, AnswerSource::ModelUnavailable)
            }
            GenerationOutcome::Degenerate => {
                Response::fixed(REPHRASE_MESSAGE, AnswerSource::Degenerate)
            }
            GenerationOutcome::Failed(reason) => Response::fixed(
                APOLOGY_MESSAGE,
                AnswerSource::GenerationFailed { reason },
            ),
        }
    }
}
