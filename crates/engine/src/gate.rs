//! Domain gate: decides whether a query is about flood risk in South Sudan.

use crate::keywords::{
    KeywordSet, AGGREGATE_PHRASES, GREETING_TERMS, LOCATION_TERMS, OPERATIONAL_TERMS,
    TOPIC_TERMS,
};

/// Keyword heuristic classifier for in-scope queries.
#[derive(Debug, Clone)]
pub struct DomainGate {
    topics: KeywordSet,
    locations: KeywordSet,
    vocabulary: KeywordSet,
}

impl DomainGate {
    /// Build a gate from explicit keyword families.
    ///
    /// `vocabulary` is the broad fallback set; it should already contain the
    /// topic and location terms.
    pub fn new(topics: KeywordSet, locations: KeywordSet, vocabulary: KeywordSet) -> Self {
        Self {
            topics,
            locations,
            vocabulary,
        }
    }

    /// Whether `query` is answerable by this system.
    ///
    /// A topic term together with a location term is accepted immediately.
    /// Otherwise any single term from the broad vocabulary is enough.
    pub fn is_in_domain(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        if self.topics.hits(&query) && self.locations.hits(&query) {
            return true;
        }

        match self.vocabulary.find_in(&query) {
            Some(keyword) => {
                tracing::trace!("In domain via keyword '{}'", keyword);
                true
            }
            None => false,
        }
    }
}

impl Default for DomainGate {
    fn default() -> Self {
        let topics = KeywordSet::new(TOPIC_TERMS);
        let locations = KeywordSet::new(LOCATION_TERMS);
        let extra = KeywordSet::new(
            OPERATIONAL_TERMS
                .iter()
                .chain(AGGREGATE_PHRASES)
                .chain(GREETING_TERMS),
        );
        let vocabulary = KeywordSet::union([&topics, &locations, &extra]);

        Self::new(topics, locations, vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_topic_and_location() {
        let gate = DomainGate::default();
        assert!(gate.is_in_domain("What is the flood risk in Bentiu?"));
        assert!(gate.is_in_domain("RAINFALL IN KAPOETA"));
        assert!(gate.is_in_domain("water level at Renk"));
    }

    #[test]
    fn test_joint_signal_short_circuits_narrow_vocabulary() {
        // Only the joint families know these words; the broad set does not.
        let gate = DomainGate::new(
            KeywordSet::new(["inundation"]),
            KeywordSet::new(["sobat"]),
            KeywordSet::new(["flood"]),
        );
        assert!(gate.is_in_domain("Inundation near the Sobat"));
        assert!(!gate.is_in_domain("Inundation elsewhere"));
    }

    #[test]
    fn test_single_operational_keyword() {
        let gate = DomainGate::default();
        assert!(gate.is_in_domain("Where is the nearest shelter?"));
        assert!(gate.is_in_domain("emergency numbers please"));
        assert!(gate.is_in_domain("Hello"));
    }

    #[test]
    fn test_out_of_domain() {
        let gate = DomainGate::default();
        for query in [
            "What is the capital of France?",
            "How do I bake a chocolate cake?",
            "Who won the World Cup in 2018?",
            "What are the best stocks to invest in?",
        ] {
            assert!(!gate.is_in_domain(query), "{} should be out of domain", query);
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        let gate = DomainGate::default();
        assert!(!gate.is_in_domain(""));
        assert!(!gate.is_in_domain("   \t\n"));
    }
}
