use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::{lexicon, segment};
use crate::error::EngineError;

use super::schema::{BonusRules, PenaltyRules, RubricDefinition};
use super::validation::validate_rubric;

static METAPHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)like|as if|similar to").unwrap());
static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"".*""#).unwrap());

/// A validated rubric with indicator matchers compiled once. Immutable after
/// construction; safe to share across concurrent scoring calls.
#[derive(Debug)]
pub struct Rubric {
    definition: RubricDefinition,
    categories: Vec<CompiledCategory>,
    warnings: Vec<String>,
}

#[derive(Debug)]
struct CompiledCategory {
    name: String,
    weight: f64,
    subcriteria: Vec<CompiledSubcriterion>,
}

#[derive(Debug)]
struct CompiledSubcriterion {
    weight: f64,
    /// Includes legacy (unevaluated) indicators so normalization matches
    /// rubrics that still declare them.
    indicator_count: usize,
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
enum CompiledRule {
    Keyword(Regex, f64),
    Pattern(Regex, f64),
    MinWords(usize, f64),
    MinSentences(usize, f64),
}

impl Rubric {
    /// Validate and compile a rubric definition. Fails with every validation
    /// error at once; collected warnings are kept on the rubric.
    pub fn new(definition: RubricDefinition) -> Result<Self, EngineError> {
        let warnings = validate_rubric(&definition).map_err(EngineError::Configuration)?;

        let categories = definition
            .categories
            .iter()
            .map(|cat| CompiledCategory {
                name: cat.name.clone(),
                weight: cat.weight,
                subcriteria: cat
                    .subcriteria
                    .iter()
                    .map(|sub| CompiledSubcriterion {
                        weight: sub.weight,
                        indicator_count: sub.indicators.len(),
                        rules: sub
                            .indicators
                            .iter()
                            .filter_map(|ind| {
                                if let Some(word) = &ind.keyword {
                                    Some(CompiledRule::Keyword(
                                        lexicon::whole_word(word),
                                        ind.points,
                                    ))
                                } else if let Some(pattern) = &ind.pattern {
                                    // Validation already proved the pattern compiles.
                                    Regex::new(pattern)
                                        .ok()
                                        .map(|re| CompiledRule::Pattern(re, ind.points))
                                } else if let Some(n) = ind.min_words {
                                    Some(CompiledRule::MinWords(n, ind.points))
                                } else {
                                    ind.min_sentences
                                        .map(|n| CompiledRule::MinSentences(n, ind.points))
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            definition,
            categories,
            warnings,
        })
    }

    /// The built-in default rubric. Always valid by construction.
    pub fn built_in() -> Self {
        Self::new(RubricDefinition::default()).expect("built-in rubric is valid")
    }

    pub fn definition(&self) -> &RubricDefinition {
        &self.definition
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// One category's evaluated result.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: String,
    /// Sum of capped indicator points before normalization.
    pub raw_indicator_score: f64,
    /// Normalized to [0, 100].
    pub normalized_score: f64,
    pub weight: f64,
    /// Rounded share of the overall score: normalized x weight.
    pub contribution: i64,
    pub performance: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub overall: u32,
    pub performance: &'static str,
    pub category_scores: Vec<CategoryScore>,
    pub bonus_total: f64,
    pub penalty_total: f64,
}

/// Qualitative label for a 0-100 score.
pub fn performance_level(score: f64) -> &'static str {
    if score >= 90.0 {
        "Excellent"
    } else if score >= 80.0 {
        "Good"
    } else if score >= 70.0 {
        "Satisfactory"
    } else if score >= 60.0 {
        "Needs Improvement"
    } else {
        "Poor"
    }
}

/// Score a response against a compiled rubric. Pure and idempotent: the same
/// text and rubric always produce the same report.
pub fn score(text: &str, rubric: &Rubric) -> Result<ScoreReport, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyResponse);
    }

    let word_count = segment::words(text).len();
    let sentence_count = segment::sentence_spans(text).len();

    let mut category_scores = Vec::with_capacity(rubric.categories.len());
    for cat in &rubric.categories {
        let mut raw = 0.0;
        let mut normalized = 0.0;
        for sub in &cat.subcriteria {
            let sub_score: f64 = sub
                .rules
                .iter()
                .map(|rule| evaluate_rule(rule, text, word_count, sentence_count))
                .sum();
            raw += sub_score;
            normalized += sub_score / (sub.indicator_count as f64 * 5.0) * 100.0 * sub.weight;
        }
        let normalized = normalized.clamp(0.0, 100.0);
        category_scores.push(CategoryScore {
            category: cat.name.clone(),
            raw_indicator_score: raw,
            normalized_score: normalized,
            weight: cat.weight,
            contribution: (normalized * cat.weight).round() as i64,
            performance: performance_level(normalized),
        });
    }

    let bonus_total = bonus_total(text, &rubric.definition.bonuses);
    let penalty_total = penalty_total(text, word_count, &rubric.definition.penalties);

    let weighted: f64 = category_scores
        .iter()
        .map(|c| c.normalized_score * c.weight)
        .sum();
    let overall = (weighted + bonus_total + penalty_total).clamp(0.0, 100.0).round() as u32;

    Ok(ScoreReport {
        overall,
        performance: performance_level(overall as f64),
        category_scores,
        bonus_total,
        penalty_total,
    })
}

fn evaluate_rule(rule: &CompiledRule, text: &str, word_count: usize, sentence_count: usize) -> f64 {
    match rule {
        // Contribution is capped at twice the indicator's point value.
        CompiledRule::Keyword(re, points) | CompiledRule::Pattern(re, points) => {
            let count = re.find_iter(text).count() as f64;
            (count * points).min(points * 2.0)
        }
        CompiledRule::MinWords(threshold, points) => {
            if word_count >= *threshold {
                *points
            } else {
                0.0
            }
        }
        CompiledRule::MinSentences(threshold, points) => {
            if sentence_count >= *threshold {
                *points
            } else {
                0.0
            }
        }
    }
}

fn bonus_total(text: &str, rules: &BonusRules) -> f64 {
    let mut bonus = 0.0;
    if METAPHOR.is_match(text) {
        bonus += rules.metaphor;
    }
    if text.contains('?') {
        bonus += rules.question;
    }
    if QUOTED_SPAN.is_match(text) {
        bonus += rules.quote;
    }
    bonus.min(rules.cap)
}

fn penalty_total(text: &str, word_count: usize, rules: &PenaltyRules) -> f64 {
    let mut penalty = 0.0;
    if word_count < rules.short_response_words {
        penalty += rules.too_short;
    }
    if word_count > rules.long_response_words {
        penalty += rules.too_long;
    }

    // One penalty unit per qualifying word type, not per excess occurrence.
    let lowered = text.to_lowercase();
    let mut frequency: HashMap<&str, u32> = HashMap::new();
    for word in lowered.split_whitespace() {
        if word.chars().count() > 4 {
            *frequency.entry(word).or_insert(0) += 1;
        }
    }
    let repeated_types = frequency.values().filter(|&&count| count > 3).count();
    penalty += repeated_types as f64 * rules.repetition;

    penalty.max(rules.floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::schema::{CategoryDef, IndicatorDef, SubcriterionDef};

    fn rubric() -> Rubric {
        Rubric::built_in()
    }

    fn long_words(n: usize) -> String {
        // "word" stays at four characters so no repetition penalty applies.
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_overall_stays_in_bounds() {
        let rubric = rubric();
        let long = long_words(1200);
        let texts = [
            "Short.",
            "I argue that clear, specific research and data matter. Therefore, because \
             studies indicate it, this holds.",
            long.as_str(),
        ];
        for text in texts {
            let report = score(text, &rubric).unwrap();
            assert!(report.overall <= 100);
            for cat in &report.category_scores {
                assert!((0.0..=100.0).contains(&cat.normalized_score), "{}", cat.category);
            }
        }
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            score("  ", &rubric()),
            Err(EngineError::EmptyResponse)
        ));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let rubric = rubric();
        let text = "I argue that clear evidence matters. What if we consider research?";
        let a = score(text, &rubric).unwrap();
        let b = score(text, &rubric).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_keyword_contribution_capped_at_double_points() {
        // Single category, single subcriterion, single keyword worth 2.
        let def = RubricDefinition {
            categories: vec![CategoryDef {
                name: "argumentation".to_string(),
                weight: 1.0,
                subcriteria: vec![SubcriterionDef {
                    name: "logic".to_string(),
                    weight: 1.0,
                    indicators: vec![IndicatorDef::keyword("therefore", 2.0)],
                }],
            }],
            ..RubricDefinition::default()
        };
        let rubric = Rubric::new(def).unwrap();

        let once = score("It follows therefore that we act.", &rubric).unwrap();
        let five = score(
            "Therefore a. Therefore b. Therefore c. Therefore d. Therefore e.",
            &rubric,
        )
        .unwrap();
        assert_eq!(once.category_scores[0].raw_indicator_score, 2.0);
        // Five occurrences cap at points x 2.
        assert_eq!(five.category_scores[0].raw_indicator_score, 4.0);
    }

    #[test]
    fn test_min_words_is_binary() {
        let def = RubricDefinition {
            categories: vec![CategoryDef {
                name: "argumentation".to_string(),
                weight: 1.0,
                subcriteria: vec![SubcriterionDef {
                    name: "depth".to_string(),
                    weight: 1.0,
                    indicators: vec![IndicatorDef::min_words(200, 5.0)],
                }],
            }],
            ..RubricDefinition::default()
        };
        let rubric = Rubric::new(def).unwrap();
        let below = score(&long_words(199), &rubric).unwrap();
        let at = score(&long_words(200), &rubric).unwrap();
        assert_eq!(below.category_scores[0].raw_indicator_score, 0.0);
        assert_eq!(at.category_scores[0].raw_indicator_score, 5.0);
    }

    #[test]
    fn test_short_response_penalty_boundary() {
        let rules = PenaltyRules::default();
        let at_boundary = long_words(100);
        let below = long_words(99);
        assert_eq!(
            penalty_total(&at_boundary, segment::words(&at_boundary).len(), &rules),
            0.0
        );
        assert_eq!(
            penalty_total(&below, segment::words(&below).len(), &rules),
            -10.0
        );
    }

    #[test]
    fn test_too_long_penalty() {
        let rules = PenaltyRules::default();
        let text = long_words(1001);
        assert_eq!(penalty_total(&text, 1001, &rules), -5.0);
    }

    #[test]
    fn test_repetition_penalizes_word_types_not_occurrences() {
        let rules = PenaltyRules::default();
        // Five "banana" occurrences in an otherwise long-enough text.
        let mut words = vec!["word"; 100];
        words.extend(["banana"; 5]);
        let text = words.join(" ");
        assert_eq!(penalty_total(&text, 105, &rules), -2.0);
    }

    #[test]
    fn test_penalty_floor() {
        let rules = PenaltyRules::default();
        // Many repeated word types in a short text: -10 short + lots of -2s.
        let mut words = Vec::new();
        for base in ["альфа", "брависсимо", "carries", "delta", "еженедельно", "fifths", "grands"] {
            words.extend([base; 4]);
        }
        let text = words.join(" ");
        let total = penalty_total(&text, words.len(), &rules);
        assert_eq!(total, -20.0);
    }

    #[test]
    fn test_bonus_rules_and_cap() {
        let rules = BonusRules::default();
        assert_eq!(bonus_total("Plain statement.", &rules), 0.0);
        assert_eq!(bonus_total("Is this not obvious?", &rules), 2.0);
        assert_eq!(
            bonus_total("It spreads like wildfire. Why? \"Quoted proof.\"", &rules),
            10.0
        );

        let tight = BonusRules {
            cap: 6.0,
            ..BonusRules::default()
        };
        assert_eq!(
            bonus_total("It spreads like wildfire. Why? \"Quoted proof.\"", &tight),
            6.0
        );
    }

    #[test]
    fn test_weighted_aggregation() {
        // Four categories at normalized 80 with the default weights and no
        // bonus or penalty must aggregate to exactly 80. Each category has
        // one subcriterion with two keyword indicators worth 4; the first
        // keyword appears twice (capped at 8), the second never, so the
        // normalized score is 8/(2x5) x 100 = 80.
        fn category(name: &str, weight: f64, keyword: &str) -> CategoryDef {
            CategoryDef {
                name: name.to_string(),
                weight,
                subcriteria: vec![SubcriterionDef {
                    name: "only".to_string(),
                    weight: 1.0,
                    indicators: vec![
                        IndicatorDef::keyword(keyword, 4.0),
                        IndicatorDef::keyword("qqqq", 4.0),
                    ],
                }],
            }
        }

        let def = RubricDefinition {
            categories: vec![
                category("argumentation", 0.30, "echo"),
                category("delivery", 0.25, "kilo"),
                category("rebuttal", 0.25, "lima"),
                category("structure", 0.20, "zulu"),
            ],
            ..RubricDefinition::default()
        };
        let rubric = Rubric::new(def).unwrap();

        // Two hits per keyword; filler keeps the word count between the
        // length-penalty thresholds. Every word is four characters, so no
        // repetition penalty, and nothing triggers a bonus rule.
        let mut words: Vec<&str> = Vec::new();
        for keyword in ["echo", "kilo", "lima", "zulu"] {
            words.extend([keyword; 2]);
        }
        words.extend(vec!["tick"; 100]);
        let text = words.join(" ");

        let report = score(&text, &rubric).unwrap();
        assert_eq!(report.bonus_total, 0.0);
        assert_eq!(report.penalty_total, 0.0);
        for cat in &report.category_scores {
            assert!(
                (cat.normalized_score - 80.0).abs() < 1e-9,
                "{}",
                cat.category
            );
        }
        assert_eq!(report.overall, 80);
    }

    #[test]
    fn test_legacy_indicators_dilute_normalization() {
        // delivery.tone declares formality_score (legacy): a full keyword hit
        // still normalizes against all three indicators.
        let rubric = rubric();
        let report = score("Respectfully, respectfully noted.", &rubric).unwrap();
        let delivery = report
            .category_scores
            .iter()
            .find(|c| c.category == "delivery")
            .unwrap();
        // tone sub: keyword "respectfully" capped at 4 of (3 indicators x 5).
        // 4/15 * 100 * 0.20 = 5.333...
        assert!((delivery.normalized_score - 16.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_performance_levels() {
        assert_eq!(performance_level(95.0), "Excellent");
        assert_eq!(performance_level(85.0), "Good");
        assert_eq!(performance_level(72.0), "Satisfactory");
        assert_eq!(performance_level(60.0), "Needs Improvement");
        assert_eq!(performance_level(10.0), "Poor");
    }

    #[test]
    fn test_built_in_rubric_reports_warnings() {
        let rubric = rubric();
        assert!(!rubric.warnings().is_empty());
    }
}
