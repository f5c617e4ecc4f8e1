//! Keyword vocabularies and substring matching.

use std::fmt;

/// An immutable, lower-cased set of keywords.
///
/// Membership is a substring test: a text hits the set when any keyword
/// occurs anywhere inside it, so "flood" matches "flooding" and "bor"
/// matches "border".
#[derive(Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// Build a set, lower-casing and de-duplicating the input.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !set.contains(&word) {
                set.push(word);
            }
        }
        Self { words: set }
    }

    /// Union of several sets, keeping first-seen order.
    pub fn union<'a>(sets: impl IntoIterator<Item = &'a KeywordSet>) -> Self {
        Self::new(sets.into_iter().flat_map(|s| s.words.iter()))
    }

    /// First keyword found in `text`. `text` must already be lower-cased.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|word| text.contains(word.as_str()))
            .map(String::as_str)
    }

    /// Whether any keyword occurs in `text`. `text` must already be lower-cased.
    pub fn hits(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words.iter()).finish()
    }
}

/// Flood and climate vocabulary used for the joint topic/location signal.
pub const TOPIC_TERMS: &[&str] = &[
    "climate change",
    "flood",
    "floods",
    "flooding",
    "rain",
    "rainfall",
    "water level",
];

/// Country, state, county and settlement names.
pub const LOCATION_TERMS: &[&str] = &[
    "south sudan", "jonglei", "johnglei", "upper nile", "unity state", "equatoria",
    "region", "county", "state", "payam", "boma", "central equatoria",
    "eastern equatoria", "western equatoria", "northern bahr el ghazal",
    "western bahr el ghazal", "lakes", "warrap", "bentiu", "bor", "malakal", "juba",
    "tonj", "yei", "wau", "aweil", "rumbek", "kuajok", "torit", "kapoeta", "magwi",
    "pochalla", "pibor", "akobo", "nasir", "melut", "renk", "kodok", "fashoda",
    "maban", "pariang", "rubkona", "mayom", "koch", "leer", "panyijiar", "guit",
    "mayendit", "abiemnhom",
];

/// Greeting words, shared with the greeting rule.
pub const GREETING_TERMS: &[&str] = &["hello", "hi", "hey", "greetings"];

/// Operational and preparedness vocabulary accepted on its own.
pub const OPERATIONAL_TERMS: &[&str] = &[
    "evacuation", "emergency", "preparation", "safety", "risk", "warning", "season",
    "climate", "change", "warming", "shelter", "center", "centres", "global", "weather",
];

/// Sidebar topic phrases, shared with the aggregate-topic rules.
pub const AGGREGATE_PHRASES: &[&str] = &[
    "regional assessments",
    "safety guidelines",
    "climate information",
];
