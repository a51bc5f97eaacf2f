use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::segment;

static DOUBLE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());

/// Mechanical-error tally and the quality score derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageQuality {
    pub double_spaces: usize,
    pub missing_capitalization: usize,
    /// Parity flag: 1 when the text contains an odd number of `"` characters.
    pub unclosed_quotes: usize,
    pub repeated_words: usize,
    pub error_penalty: u32,
    pub quality_score: u32,
    pub suggestions: Vec<&'static str>,
}

pub fn compute(text: &str) -> LanguageQuality {
    let double_spaces = DOUBLE_SPACE.find_iter(text).count();

    let missing_capitalization = segment::sentences(text)
        .iter()
        .filter(|s| !s.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
        .count();

    let unclosed_quotes = text.chars().filter(|&c| c == '"').count() % 2;

    let tokens = segment::words(text);
    let repeated_words = tokens
        .windows(2)
        .filter(|pair| {
            pair[0].chars().count() > 2 && pair[0].to_lowercase() == pair[1].to_lowercase()
        })
        .count();

    let error_penalty = (2 * double_spaces
        + 5 * missing_capitalization
        + 10 * unclosed_quotes
        + 3 * repeated_words) as u32;
    let quality_score = 100u32.saturating_sub(error_penalty);

    let mut suggestions = Vec::new();
    if double_spaces > 0 {
        suggestions.push("Remove extra spaces between words");
    }
    if missing_capitalization > 0 {
        suggestions.push("Capitalize the first letter of each sentence");
    }
    if unclosed_quotes > 0 {
        suggestions.push("Check for unclosed quotation marks");
    }
    if repeated_words > 0 {
        suggestions.push("Avoid repeating the same word consecutively");
    }

    LanguageQuality {
        double_spaces,
        missing_capitalization,
        unclosed_quotes,
        repeated_words,
        error_penalty,
        quality_score,
        suggestions,
    }
}
