use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static, versioned scoring configuration: weighted categories, each holding
/// weighted subcriteria, each holding an ordered list of indicators, plus the
/// bonus and penalty rules. Loaded and validated once, then shared read-only.
///
/// Example YAML:
/// ```yaml
/// version: "2024-custom"
/// categories:
///   - name: argumentation
///     weight: 0.6
///     subcriteria:
///       - name: evidence
///         weight: 1.0
///         indicators:
///           - { keyword: "research", points: 4 }
///           - { pattern: '\d+%', points: 2 }
///           - { min_words: 200, points: 5 }
///   - name: structure
///     weight: 0.4
///     subcriteria: [ ... ]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RubricDefinition {
    /// Free-form version label for the rubric variant.
    #[serde(default = "default_version")]
    pub version: String,

    pub categories: Vec<CategoryDef>,

    #[serde(default)]
    pub bonuses: BonusRules,

    #[serde(default)]
    pub penalties: PenaltyRules,
}

fn default_version() -> String {
    "builtin-1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CategoryDef {
    pub name: String,
    /// Category weights must sum to 1.0 across the rubric.
    pub weight: f64,
    pub subcriteria: Vec<SubcriterionDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SubcriterionDef {
    pub name: String,
    /// Subcriterion weights must sum to 1.0 within their category.
    pub weight: f64,
    pub indicators: Vec<IndicatorDef>,
}

/// One scoring rule. Exactly one of `keyword`, `pattern`, `min_words`,
/// `min_sentences` should be set. Any other declared kind lands in `legacy`
/// and is reported as a load-time warning: it still counts toward the
/// subcriterion's normalization denominator but contributes zero points,
/// matching the historical scorer.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IndicatorDef {
    /// Whole-word, case-insensitive keyword counted globally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Regular expression counted globally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Binary: full points when the word count reaches the threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_words: Option<usize>,

    /// Binary: full points when the sentence count reaches the threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sentences: Option<usize>,

    pub points: f64,

    /// Declared-but-unevaluated indicator kinds (sentence_variety,
    /// formality_score, ...). Kept representable so legacy rubric files load
    /// with their denominators intact.
    #[serde(flatten)]
    pub legacy: BTreeMap<String, serde_json::Value>,
}

impl IndicatorDef {
    pub fn keyword(word: &str, points: f64) -> Self {
        Self {
            keyword: Some(word.to_string()),
            ..Self::empty(points)
        }
    }

    pub fn pattern(pattern: &str, points: f64) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
            ..Self::empty(points)
        }
    }

    pub fn min_words(threshold: usize, points: f64) -> Self {
        Self {
            min_words: Some(threshold),
            ..Self::empty(points)
        }
    }

    pub fn min_sentences(threshold: usize, points: f64) -> Self {
        Self {
            min_sentences: Some(threshold),
            ..Self::empty(points)
        }
    }

    /// A legacy indicator kind that is declared but never evaluated.
    pub fn legacy(kind: &str, points: f64) -> Self {
        let mut def = Self::empty(points);
        def.legacy
            .insert(kind.to_string(), serde_json::Value::Bool(true));
        def
    }

    fn empty(points: f64) -> Self {
        Self {
            keyword: None,
            pattern: None,
            min_words: None,
            min_sentences: None,
            points,
            legacy: BTreeMap::new(),
        }
    }
}

/// Binary engagement/creativity bonuses, applied outside the category tree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BonusRules {
    /// Metaphor-style phrasing present ("like", "as if", "similar to").
    #[serde(default = "default_metaphor")]
    pub metaphor: f64,
    /// A question mark anywhere.
    #[serde(default = "default_question")]
    pub question: f64,
    /// A quoted span anywhere.
    #[serde(default = "default_quote")]
    pub quote: f64,
    /// Upper bound on the bonus total. The historical cap of +15 is not
    /// reachable with the three default rules; validation warns about it.
    #[serde(default = "default_bonus_cap")]
    pub cap: f64,
}

fn default_metaphor() -> f64 {
    5.0
}
fn default_question() -> f64 {
    2.0
}
fn default_quote() -> f64 {
    3.0
}
fn default_bonus_cap() -> f64 {
    15.0
}

impl Default for BonusRules {
    fn default() -> Self {
        Self {
            metaphor: default_metaphor(),
            question: default_question(),
            quote: default_quote(),
            cap: default_bonus_cap(),
        }
    }
}

/// Length and repetition penalties. All point values are negative; the total
/// is floored (its magnitude capped) at `floor`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PenaltyRules {
    /// Word count strictly below this incurs `too_short`.
    #[serde(default = "default_short_words")]
    pub short_response_words: usize,
    #[serde(default = "default_too_short")]
    pub too_short: f64,
    /// Word count strictly above this incurs `too_long`.
    #[serde(default = "default_long_words")]
    pub long_response_words: usize,
    #[serde(default = "default_too_long")]
    pub too_long: f64,
    /// Applied once per distinct word (longer than four characters) that
    /// occurs more than three times.
    #[serde(default = "default_repetition")]
    pub repetition: f64,
    #[serde(default = "default_penalty_floor")]
    pub floor: f64,
}

fn default_short_words() -> usize {
    100
}
fn default_too_short() -> f64 {
    -10.0
}
fn default_long_words() -> usize {
    1000
}
fn default_too_long() -> f64 {
    -5.0
}
fn default_repetition() -> f64 {
    -2.0
}
fn default_penalty_floor() -> f64 {
    -20.0
}

impl Default for PenaltyRules {
    fn default() -> Self {
        Self {
            short_response_words: default_short_words(),
            too_short: default_too_short(),
            long_response_words: default_long_words(),
            too_long: default_too_long(),
            repetition: default_repetition(),
            floor: default_penalty_floor(),
        }
    }
}

impl Default for RubricDefinition {
    /// The built-in rubric: four categories (argumentation 0.30, delivery
    /// 0.25, rebuttal 0.25, structure 0.20) with the historical subcriteria
    /// and indicator tables, legacy kinds included.
    fn default() -> Self {
        use IndicatorDef as I;

        let argumentation = CategoryDef {
            name: "argumentation".to_string(),
            weight: 0.30,
            subcriteria: vec![
                SubcriterionDef {
                    name: "clarity".to_string(),
                    weight: 0.25,
                    indicators: vec![
                        I::keyword("clear", 2.0),
                        I::keyword("specific", 2.0),
                        I::keyword("precise", 1.0),
                        I::pattern(r"(?i)I (argue|believe|contend) that", 3.0),
                    ],
                },
                SubcriterionDef {
                    name: "evidence".to_string(),
                    weight: 0.35,
                    indicators: vec![
                        I::keyword("example", 3.0),
                        I::keyword("research", 4.0),
                        I::keyword("study", 4.0),
                        I::keyword("data", 3.0),
                        I::pattern(r"(?i)according to", 2.0),
                        I::pattern(r"\d+%", 2.0),
                    ],
                },
                SubcriterionDef {
                    name: "logic".to_string(),
                    weight: 0.25,
                    indicators: vec![
                        I::keyword("therefore", 2.0),
                        I::keyword("because", 2.0),
                        I::keyword("consequently", 2.0),
                        I::keyword("thus", 2.0),
                        I::pattern(r"(?i)if.*then", 3.0),
                    ],
                },
                SubcriterionDef {
                    name: "depth".to_string(),
                    weight: 0.15,
                    indicators: vec![
                        I::pattern(r"(?i)first.*second.*third", 5.0),
                        I::min_words(200, 5.0),
                        I::min_sentences(8, 3.0),
                    ],
                },
            ],
        };

        let delivery = CategoryDef {
            name: "delivery".to_string(),
            weight: 0.25,
            subcriteria: vec![
                SubcriterionDef {
                    name: "clarity".to_string(),
                    weight: 0.30,
                    indicators: vec![
                        I::legacy("avg_word_length", 5.0),
                        I::legacy("sentence_variety", 5.0),
                    ],
                },
                SubcriterionDef {
                    name: "engagement".to_string(),
                    weight: 0.30,
                    indicators: vec![
                        I::keyword("imagine", 2.0),
                        I::keyword("consider", 2.0),
                        I::pattern(r"(?i)what if", 3.0),
                        I::legacy("rhetorical_questions", 3.0),
                    ],
                },
                SubcriterionDef {
                    name: "tone".to_string(),
                    weight: 0.20,
                    indicators: vec![
                        I::keyword("respectfully", 2.0),
                        I::keyword("importantly", 1.0),
                        I::legacy("formality_score", 5.0),
                    ],
                },
                SubcriterionDef {
                    name: "flow".to_string(),
                    weight: 0.20,
                    indicators: vec![
                        I::keyword("furthermore", 2.0),
                        I::keyword("however", 2.0),
                        I::keyword("additionally", 2.0),
                        I::legacy("transition_words", 5.0),
                    ],
                },
            ],
        };

        let rebuttal = CategoryDef {
            name: "rebuttal".to_string(),
            weight: 0.25,
            subcriteria: vec![
                SubcriterionDef {
                    name: "anticipation".to_string(),
                    weight: 0.35,
                    indicators: vec![
                        I::pattern(r"(?i)some (may|might|could) argue", 5.0),
                        I::pattern(r"(?i)critics (say|claim|argue)", 4.0),
                        I::keyword("opponents", 3.0),
                        I::keyword("counterargument", 4.0),
                    ],
                },
                SubcriterionDef {
                    name: "refutation".to_string(),
                    weight: 0.35,
                    indicators: vec![
                        I::keyword("however", 2.0),
                        I::keyword("nevertheless", 3.0),
                        I::keyword("despite", 2.0),
                        I::pattern(r"(?i)this is flawed because", 5.0),
                    ],
                },
                SubcriterionDef {
                    name: "balance".to_string(),
                    weight: 0.30,
                    indicators: vec![
                        I::keyword("acknowledge", 3.0),
                        I::keyword("valid", 2.0),
                        I::pattern(r"(?i)while.*valid.*however", 5.0),
                        I::legacy("both_sides_addressed", 5.0),
                    ],
                },
            ],
        };

        let structure = CategoryDef {
            name: "structure".to_string(),
            weight: 0.20,
            subcriteria: vec![
                SubcriterionDef {
                    name: "introduction".to_string(),
                    weight: 0.30,
                    indicators: vec![
                        I::pattern(r"(?i)^(In this debate|I will argue|The topic)", 5.0),
                        I::legacy("thesis_in_first", 5.0),
                        I::legacy("roadmap", 3.0),
                    ],
                },
                SubcriterionDef {
                    name: "body".to_string(),
                    weight: 0.40,
                    indicators: vec![
                        I::legacy("paragraph_count", 5.0),
                        I::legacy("topic_sentences", 5.0),
                        I::legacy("logical_progression", 5.0),
                    ],
                },
                SubcriterionDef {
                    name: "conclusion".to_string(),
                    weight: 0.30,
                    indicators: vec![
                        I::pattern(r"(?i)(in conclusion|to conclude|finally)", 5.0),
                        I::legacy("summary_present", 3.0),
                        I::legacy("call_to_action", 2.0),
                    ],
                },
            ],
        };

        RubricDefinition {
            version: default_version(),
            categories: vec![argumentation, delivery, rebuttal, structure],
            bonuses: BonusRules::default(),
            penalties: PenaltyRules::default(),
        }
    }
}
