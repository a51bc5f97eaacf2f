use regex::Regex;

use super::schema::{IndicatorDef, RubricDefinition};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Validate a rubric definition at load time. Returns all errors at once
/// (not just the first). On success, returns non-fatal warnings: legacy
/// indicator kinds that will not be evaluated, and a bonus cap that no
/// combination of bonus rules can reach.
pub fn validate_rubric(def: &RubricDefinition) -> Result<Vec<String>, Vec<String>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if def.categories.is_empty() {
        errors.push("rubric: must define at least one category".to_string());
    }

    let weight_sum: f64 = def.categories.iter().map(|c| c.weight).sum();
    if !def.categories.is_empty() && (weight_sum - 1.0).abs() > WEIGHT_TOLERANCE {
        errors.push(format!(
            "rubric: category weights must sum to 1.0 (got {weight_sum})"
        ));
    }

    for cat in &def.categories {
        if cat.name.trim().is_empty() {
            errors.push("rubric: category with empty name".to_string());
        }
        if cat.subcriteria.is_empty() {
            errors.push(format!(
                "categories.{}: missing required subcriteria",
                cat.name
            ));
            continue;
        }

        let sub_sum: f64 = cat.subcriteria.iter().map(|s| s.weight).sum();
        if (sub_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            errors.push(format!(
                "categories.{}: subcriterion weights must sum to 1.0 (got {sub_sum})",
                cat.name
            ));
        }

        for sub in &cat.subcriteria {
            if sub.indicators.is_empty() {
                errors.push(format!(
                    "categories.{}.{}: must define at least one indicator",
                    cat.name, sub.name
                ));
            }
            for (i, ind) in sub.indicators.iter().enumerate() {
                check_indicator(ind, &cat.name, &sub.name, i, &mut errors, &mut warnings);
            }
        }
    }

    if def.bonuses.cap < 0.0 {
        errors.push("bonuses.cap: must be non-negative".to_string());
    }
    let attainable = def.bonuses.metaphor + def.bonuses.question + def.bonuses.quote;
    if def.bonuses.cap > attainable {
        warnings.push(format!(
            "bonuses.cap: +{} is unreachable, bonus rules total +{}",
            def.bonuses.cap, attainable
        ));
    }

    if def.penalties.floor > 0.0 {
        errors.push("penalties.floor: must be non-positive".to_string());
    }
    for (name, value) in [
        ("too_short", def.penalties.too_short),
        ("too_long", def.penalties.too_long),
        ("repetition", def.penalties.repetition),
    ] {
        if value > 0.0 {
            errors.push(format!("penalties.{name}: must be non-positive"));
        }
    }
    if def.penalties.short_response_words >= def.penalties.long_response_words {
        errors.push(
            "penalties: short_response_words must be below long_response_words".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(errors)
    }
}

fn check_indicator(
    ind: &IndicatorDef,
    cat: &str,
    sub: &str,
    index: usize,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let location = format!("categories.{cat}.{sub}.indicators[{index}]");

    let kinds_set = [
        ind.keyword.is_some(),
        ind.pattern.is_some(),
        ind.min_words.is_some(),
        ind.min_sentences.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();

    if kinds_set > 1 {
        errors.push(format!("{location}: declares more than one rule kind"));
    } else if kinds_set == 0 {
        if ind.legacy.is_empty() {
            errors.push(format!("{location}: declares no rule kind"));
        } else {
            let kinds: Vec<&str> = ind.legacy.keys().map(String::as_str).collect();
            warnings.push(format!(
                "{location}: unsupported indicator kind(s) {} will count toward \
                 normalization but never score",
                kinds.join(", ")
            ));
        }
    } else if !ind.legacy.is_empty() {
        let kinds: Vec<&str> = ind.legacy.keys().map(String::as_str).collect();
        errors.push(format!(
            "{location}: mixes a supported rule with unsupported kind(s) {}",
            kinds.join(", ")
        ));
    }

    if ind.points <= 0.0 {
        errors.push(format!("{location}: points must be positive"));
    }

    if let Some(pattern) = &ind.pattern {
        if let Err(e) = Regex::new(pattern) {
            errors.push(format!("{location}: invalid pattern '{pattern}' - {e}"));
        }
    }

    if ind.min_words == Some(0) || ind.min_sentences == Some(0) {
        errors.push(format!("{location}: threshold must be at least 1"));
    }
}
