use serde::Serialize;

use super::lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// Lexicon tally over lowercased whitespace tokens. Matching is exact-token:
/// punctuation-adjacent forms ("great," vs "great") do not match. This
/// mirrors historical behavior and is kept deliberately.
#[derive(Debug, Clone, Serialize)]
pub struct Sentiment {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub overall: Polarity,
    pub confidence: f64,
}

pub fn compute(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut positive = 0;
    let mut negative = 0;
    let mut neutral = 0;
    for token in &tokens {
        if lexicon::POSITIVE_WORDS.contains(token) {
            positive += 1;
        } else if lexicon::NEGATIVE_WORDS.contains(token) {
            negative += 1;
        } else if lexicon::NEUTRAL_WORDS.contains(token) {
            neutral += 1;
        }
    }

    let overall = if positive > negative {
        Polarity::Positive
    } else if negative > positive {
        Polarity::Negative
    } else {
        Polarity::Neutral
    };

    let hits = positive + negative + neutral;
    let confidence = if tokens.is_empty() {
        0.0
    } else {
        hits as f64 / tokens.len() as f64
    };

    Sentiment {
        positive,
        negative,
        neutral,
        overall,
        confidence,
    }
}
