use std::collections::HashSet;

use serde::Serialize;

use super::segment;

/// Basic descriptive counts and ratios for a response.
#[derive(Debug, Clone, Serialize)]
pub struct TextMetrics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub unique_words: usize,
    pub vocabulary_diversity: f64,
}

/// Compute counts and ratios. Zero-word and zero-sentence input yields zeroed
/// ratios rather than NaN.
pub fn compute(text: &str) -> TextMetrics {
    let words = segment::words(text);
    let sentence_count = segment::sentence_spans(text).len();
    let paragraph_count = segment::paragraphs(text).len();

    let word_count = words.len();
    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let unique_words = unique.len();

    let average_word_length = if word_count > 0 {
        total_word_chars as f64 / word_count as f64
    } else {
        0.0
    };
    let average_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let vocabulary_diversity = if word_count > 0 {
        unique_words as f64 / word_count as f64
    } else {
        0.0
    };

    TextMetrics {
        character_count: text.chars().count(),
        word_count,
        sentence_count,
        paragraph_count,
        average_word_length,
        average_sentence_length,
        unique_words,
        vocabulary_diversity,
    }
}
