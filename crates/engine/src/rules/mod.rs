//! Rule matcher: an ordered table of predicate/answer pairs.
//!
//! Rules are tried top to bottom and the first match wins. Order is part of
//! the behavior: named phrases and places come before the broad keyword
//! co-occurrence rules so a generic "flood" hit never shadows them.

pub mod answers;

use crate::keywords::{KeywordSet, AGGREGATE_PHRASES, GREETING_TERMS};
use crate::regions::SETTLEMENTS;
use serde::Serialize;

const FLOOD_TERMS: &[&str] = &["flood", "floods", "flooding"];

/// The kind of question a rule answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    Greeting,
    AggregateTopic,
    StateRegion,
    Settlement,
    EvacuationShelter,
    ClimateChange,
    Preparation,
    Safety,
    Causes,
    Season,
}

/// When a rule applies to a lower-cased query.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Any keyword of the set occurs in the query
    Any(KeywordSet),

    /// Every set has at least one keyword in the query
    All(Vec<KeywordSet>),
}

impl Predicate {
    pub fn any<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::Any(KeywordSet::new(words))
    }

    /// Co-occurrence of a topic vocabulary with flood vocabulary.
    fn with_flood<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::All(vec![KeywordSet::new(words), KeywordSet::new(FLOOD_TERMS)])
    }

    pub fn matches(&self, query: &str) -> bool {
        match self {
            Self::Any(set) => set.hits(query),
            Self::All(sets) => sets.iter().all(|set| set.hits(query)),
        }
    }
}

/// A predicate with the finished answer it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub category: RuleCategory,
    pub predicate: Predicate,
    pub answer: String,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        category: RuleCategory,
        predicate: Predicate,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            predicate,
            answer: answer.into(),
        }
    }
}

/// Ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// First rule matching `query`, compared case-insensitively.
    pub fn find(&self, query: &str) -> Option<&Rule> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let rule = self.rules.iter().find(|rule| rule.predicate.matches(&query));
        if let Some(rule) = rule {
            tracing::debug!("Matched rule '{}'", rule.name);
        }
        rule
    }

    /// Canned answer for `query`, or `None` to fall through to the model.
    pub fn match_rule(&self, query: &str) -> Option<&str> {
        self.find(query).map(|rule| rule.answer.as_str())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        use RuleCategory::*;

        let mut rules = vec![Rule::new(
            "greeting",
            Greeting,
            Predicate::any(GREETING_TERMS),
            answers::GREETING,
        )];

        let aggregate = [
            answers::REGIONAL_ASSESSMENTS,
            answers::SAFETY_GUIDELINES,
            answers::CLIMATE_INFORMATION,
        ];
        for (phrase, answer) in AGGREGATE_PHRASES.iter().zip(aggregate) {
            rules.push(Rule::new(
                *phrase,
                AggregateTopic,
                Predicate::any([phrase]),
                answer,
            ));
        }

        rules.extend([
            Rule::new(
                "jonglei",
                StateRegion,
                Predicate::any(["jonglei", "johnglei"]),
                answers::JONGLEI,
            ),
            Rule::new(
                "upper nile",
                StateRegion,
                Predicate::any(["upper nile"]),
                answers::UPPER_NILE,
            ),
            Rule::new(
                "unity state",
                StateRegion,
                Predicate::any(["unity state"]),
                answers::UNITY_STATE,
            ),
            Rule::new(
                "equatoria",
                StateRegion,
                Predicate::any(["equatoria"]),
                answers::EQUATORIA,
            ),
        ]);

        for record in &SETTLEMENTS {
            rules.push(Rule::new(
                record.name.to_lowercase(),
                Settlement,
                Predicate::any([record.name]),
                record.answer(),
            ));
        }

        rules.extend([
            Rule::new(
                "evacuation centers",
                EvacuationShelter,
                Predicate::All(vec![
                    KeywordSet::new(["evacuation", "center", "centres", "shelter"]),
                    KeywordSet::new(["malakal", "bentiu", "bor", "juba"]),
                ]),
                answers::EVACUATION_CENTERS,
            ),
            Rule::new(
                "climate change",
                ClimateChange,
                Predicate::with_flood(["climate", "change", "global", "warming"]),
                answers::CLIMATE_CHANGE,
            ),
            Rule::new(
                "preparation",
                Preparation,
                Predicate::any(["prepare", "preparation", "preparing", "ready"]),
                answers::PREPARATION,
            ),
            Rule::new(
                "safety",
                Safety,
                Predicate::with_flood(["safety", "safe", "protect", "protection"]),
                answers::SAFETY_TIPS,
            ),
            Rule::new(
                "causes",
                Causes,
                Predicate::with_flood(["cause", "causes", "why", "reason"]),
                answers::CAUSES,
            ),
            Rule::new(
                "season",
                Season,
                Predicate::with_flood(["season", "when", "time", "period"]),
                answers::SEASON,
            ),
        ]);

        Self::new(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(query: &str) -> Option<RuleCategory> {
        RuleTable::default().find(query).map(|rule| rule.category)
    }

    #[test]
    fn test_category_order_is_fixed() {
        let table = RuleTable::default();
        let mut categories: Vec<RuleCategory> =
            table.rules().iter().map(|rule| rule.category).collect();
        categories.dedup();

        assert_eq!(
            categories,
            vec![
                RuleCategory::Greeting,
                RuleCategory::AggregateTopic,
                RuleCategory::StateRegion,
                RuleCategory::Settlement,
                RuleCategory::EvacuationShelter,
                RuleCategory::ClimateChange,
                RuleCategory::Preparation,
                RuleCategory::Safety,
                RuleCategory::Causes,
                RuleCategory::Season,
            ]
        );
    }

    #[test]
    fn test_greeting() {
        let table = RuleTable::default();
        assert_eq!(table.match_rule("hello"), Some(answers::GREETING));
        assert_eq!(table.match_rule("  Hey there "), Some(answers::GREETING));
    }

    #[test]
    fn test_greeting_runs_before_everything() {
        assert_eq!(
            category_of("Hello, what is the flood risk in Bor?"),
            Some(RuleCategory::Greeting)
        );
    }

    #[test]
    fn test_aggregate_phrases_are_verbatim_blocks() {
        let table = RuleTable::default();
        assert_eq!(
            table.match_rule("Regional Assessments"),
            Some(answers::REGIONAL_ASSESSMENTS)
        );
        assert_eq!(
            table.match_rule("safety guidelines for floods"),
            Some(answers::SAFETY_GUIDELINES)
        );
        assert_eq!(
            table.match_rule("Climate Information"),
            Some(answers::CLIMATE_INFORMATION)
        );
    }

    #[test]
    fn test_regional_assessments_keeps_trailing_spaces() {
        assert!(answers::REGIONAL_ASSESSMENTS
            .contains("• Bor: High flood risk, May-October season, affects ~95,000 people  \n"));
    }

    #[test]
    fn test_states_before_settlements() {
        let table = RuleTable::default();
        // Mentions Bentiu, but the state rule is more specific and earlier.
        assert_eq!(
            table.match_rule("Flooding in Unity State around Bentiu"),
            Some(answers::UNITY_STATE)
        );
        assert_eq!(table.match_rule("johnglei floods"), Some(answers::JONGLEI));
        assert_eq!(
            table.match_rule("Is Central Equatoria at risk?"),
            Some(answers::EQUATORIA)
        );
        assert_eq!(table.match_rule("upper nile"), Some(answers::UPPER_NILE));
    }

    #[test]
    fn test_settlement_lookup() {
        let table = RuleTable::default();
        let answer = table.match_rule("What is the flood risk in Bentiu?").unwrap();
        assert!(answer.contains("High flood risk"));
        assert!(answer.contains("May to October"));
        assert!(answer.contains("120,000"));

        let wau = table.match_rule("wau").unwrap();
        assert!(wau.contains("July to August"));
        assert!(wau.contains("25,000"));
    }

    #[test]
    fn test_settlement_shadows_evacuation_rule() {
        // Named places are checked before the evacuation co-occurrence rule.
        assert_eq!(
            category_of("Where are evacuation centers located in Malakal?"),
            Some(RuleCategory::Settlement)
        );
    }

    #[test]
    fn test_evacuation_requires_both_families() {
        let table = RuleTable::default();
        let rule = table
            .rules()
            .iter()
            .find(|rule| rule.category == RuleCategory::EvacuationShelter)
            .unwrap();

        assert!(rule.predicate.matches("shelter in juba"));
        assert!(!rule.predicate.matches("shelter near the river"));
        assert!(!rule.predicate.matches("juba market"));
    }

    #[test]
    fn test_keyword_co_occurrence_rules() {
        assert_eq!(
            category_of("How does climate change affect flooding in South Sudan?"),
            Some(RuleCategory::ClimateChange)
        );
        assert_eq!(
            category_of("How can I prepare for floods?"),
            Some(RuleCategory::Preparation)
        );
        assert_eq!(
            category_of("What safety measures should I take during a flood?"),
            Some(RuleCategory::Safety)
        );
        assert_eq!(
            category_of("What causes flooding?"),
            Some(RuleCategory::Causes)
        );
        assert_eq!(
            category_of("When is the flood season in South Sudan?"),
            Some(RuleCategory::Season)
        );
    }

    #[test]
    fn test_topic_without_flood_does_not_match() {
        assert_eq!(category_of("Is it safe to travel?"), None);
        assert_eq!(category_of("What time is it?"), None);
    }

    #[test]
    fn test_no_match() {
        let table = RuleTable::default();
        assert_eq!(table.match_rule("Tell me about the water level in Akobo county"), None);
        assert_eq!(table.match_rule(""), None);
        assert_eq!(table.match_rule("   "), None);
    }

    #[test]
    fn test_matching_is_deterministic() {
        let table = RuleTable::default();
        let query = "What is the flood risk in Juba?";
        assert_eq!(table.match_rule(query), table.match_rule(query));
    }
}
