use serde::Serialize;

use super::segment;

/// Flesch readability results with a plain-English interpretation band.
#[derive(Debug, Clone, Serialize)]
pub struct Readability {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub interpretation: &'static str,
}

pub fn compute(text: &str) -> Readability {
    let words = segment::words(text);
    let sentence_count = segment::sentence_spans(text).len();

    if words.is_empty() || sentence_count == 0 {
        return Readability {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            interpretation: "Insufficient text",
        };
    }

    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = word_count / sentence_count as f64;
    let syllables_per_word = syllables as f64 / word_count;

    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let fk_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    Readability {
        flesch_reading_ease: flesch.clamp(0.0, 100.0),
        flesch_kincaid_grade: fk_grade.max(0.0),
        // Interpretation is banded on the unclamped score.
        interpretation: interpret(flesch),
    }
}

/// Heuristic syllable count: each run of vowels counts once, a trailing
/// silent `e` subtracts one, and every word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count: isize = 0;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if word.ends_with('e') {
        count -= 1;
    }
    count.max(1) as usize
}

fn interpret(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy"
    } else if score >= 80.0 {
        "Easy"
    } else if score >= 70.0 {
        "Fairly Easy"
    } else if score >= 60.0 {
        "Standard"
    } else if score >= 50.0 {
        "Fairly Difficult"
    } else if score >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}
