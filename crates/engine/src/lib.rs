//! FloodSense query-answering engine.
//!
//! Answers natural-language questions about flood risk in South Sudan in
//! three layers:
//! - a keyword [`DomainGate`] rejects out-of-scope questions
//! - an ordered [`RuleTable`] returns expert answers for common questions
//! - the generative model behind a [`floodsense_llm::ModelAdapter`] handles the rest
//!
//! [`ResponseEngine::answer`] never fails; every failure ends in a
//! user-facing message.

pub mod gate;
pub mod keywords;
pub mod regions;
pub mod responder;
pub mod rules;

// Re-export main types
pub use gate::DomainGate;
pub use keywords::KeywordSet;
pub use regions::{RegionRecord, RiskLevel, SETTLEMENTS};
pub use responder::{AnswerSource, Response, ResponseEngine};
pub use rules::{Predicate, Rule, RuleCategory, RuleTable};
