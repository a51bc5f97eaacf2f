use serde::Serialize;

use super::{lexicon, segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variety {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Variety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variety::High => write!(f, "high"),
            Variety::Medium => write!(f, "medium"),
            Variety::Low => write!(f, "low"),
        }
    }
}

/// Structural signals: opener/closer phrases, transition density, and
/// sentence-length variety, rolled into a 0-100 structure score.
#[derive(Debug, Clone, Serialize)]
pub struct Structure {
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub paragraph_count: usize,
    pub transition_count: usize,
    pub sentence_variety: Variety,
    pub structure_score: u32,
}

pub fn compute(text: &str) -> Structure {
    let has_introduction = lexicon::INTRO_OPENERS.is_match(text);
    let has_conclusion = lexicon::CONCLUSION_CLOSERS.is_match(text);
    let paragraph_count = segment::paragraphs(text).len();

    let transition_count: usize = lexicon::TRANSITION_MATCHERS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();

    let sentence_variety = variety(text);

    let variety_points = match sentence_variety {
        Variety::High => 25,
        Variety::Medium => 15,
        Variety::Low => 5,
    };
    let structure_score = if has_introduction { 25 } else { 0 }
        + if has_conclusion { 25 } else { 0 }
        + (transition_count as u32 * 5).min(25)
        + variety_points;

    Structure {
        has_introduction,
        has_conclusion,
        paragraph_count,
        transition_count,
        sentence_variety,
        structure_score,
    }
}

/// Standard deviation of sentence lengths (in words), bucketed.
fn variety(text: &str) -> Variety {
    let lengths: Vec<f64> = segment::sentences(text)
        .iter()
        .map(|s| segment::words(s).len() as f64)
        .collect();
    if lengths.is_empty() {
        return Variety::Low;
    }

    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance =
        lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev > 5.0 {
        Variety::High
    } else if std_dev > 2.0 {
        Variety::Medium
    } else {
        Variety::Low
    }
}
