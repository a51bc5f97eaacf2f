//! Static English lexicons used by the descriptive analyzers. These are
//! intentionally small, literal lists; scoring is English-bound and matching
//! is exact-token or substring for compatibility with historical results.

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::ElementKind;

pub const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "great",
    "wonderful",
    "fantastic",
    "amazing",
    "brilliant",
    "outstanding",
    "exceptional",
    "superb",
    "remarkable",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "poor",
    "bad",
    "disappointing",
    "inadequate",
    "unsatisfactory",
    "weak",
    "flawed",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "adequate",
    "acceptable",
    "moderate",
    "average",
    "fair",
    "reasonable",
    "satisfactory",
    "decent",
    "okay",
    "standard",
];

/// Transition phrases grouped by rhetorical function. Counting is whole-word
/// and case-insensitive across the full text.
pub const TRANSITION_GROUPS: &[(&str, &[&str])] = &[
    (
        "addition",
        &["furthermore", "moreover", "additionally", "also", "besides"],
    ),
    (
        "contrast",
        &["however", "nevertheless", "although", "despite", "yet"],
    ),
    ("cause", &["because", "since", "as", "due to", "owing to"]),
    (
        "effect",
        &["therefore", "thus", "consequently", "hence", "accordingly"],
    ),
    (
        "sequence",
        &["firstly", "secondly", "finally", "subsequently", "next"],
    ),
    (
        "example",
        &["for example", "for instance", "such as", "namely", "specifically"],
    ),
];

/// Debate-element indicator phrases, matched per sentence by case-insensitive
/// substring containment (deliberately not boundary-aware).
pub const ELEMENT_INDICATORS: &[(ElementKind, &[&str])] = &[
    (
        ElementKind::Claim,
        &["argue", "believe", "contend", "assert", "maintain"],
    ),
    (
        ElementKind::Evidence,
        &["research shows", "studies indicate", "data suggests", "according to"],
    ),
    (
        ElementKind::Reasoning,
        &["because", "therefore", "since", "as", "consequently"],
    ),
    (
        ElementKind::Counterargument,
        &["however", "on the other hand", "critics argue", "opponents claim"],
    ),
    (
        ElementKind::Concession,
        &["admittedly", "granted", "true", "acknowledge", "recognize"],
    ),
];

/// Anchored opener phrases signalling an introduction.
pub static INTRO_OPENERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(in this debate|i will argue|the topic|today)").unwrap());

/// Closer phrases signalling a conclusion, matched anywhere in the text.
pub static CONCLUSION_CLOSERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(in conclusion|to conclude|finally|in summary)").unwrap());

/// One whole-word, case-insensitive matcher per transition phrase.
pub static TRANSITION_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TRANSITION_GROUPS
        .iter()
        .flat_map(|(_, phrases)| phrases.iter())
        .map(|phrase| whole_word(phrase))
        .collect()
});

/// Compile a case-insensitive whole-word matcher for a literal word or phrase.
pub fn whole_word(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap()
}
