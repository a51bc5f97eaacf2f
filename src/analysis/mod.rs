pub mod elements;
pub mod lexicon;
pub mod metrics;
pub mod quality;
pub mod readability;
pub mod segment;
pub mod sentiment;
pub mod structure;

pub use elements::{Balance, DebateElements, ElementHit, ElementKind};
pub use metrics::TextMetrics;
pub use quality::LanguageQuality;
pub use readability::Readability;
pub use sentiment::{Polarity, Sentiment};
pub use structure::{Structure, Variety};

use serde::Serialize;

use crate::error::EngineError;

/// Descriptive, non-evaluative profile of a response: counts, readability,
/// sentiment tally, structural signals, debate-element hits, and mechanical
/// errors. Produced fresh per call; never cached or persisted here.
#[derive(Debug, Clone, Serialize)]
pub struct LinguisticProfile {
    pub metrics: TextMetrics,
    pub readability: Readability,
    pub sentiment: Sentiment,
    pub structure: Structure,
    pub elements: DebateElements,
    pub quality: LanguageQuality,
}

/// Run all six analyzers over the text.
///
/// Empty or whitespace-only input is rejected. Degenerate text that survives
/// the emptiness check (say, a lone emoji) yields zeroed values instead.
pub fn analyze(text: &str) -> Result<LinguisticProfile, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyResponse);
    }

    Ok(LinguisticProfile {
        metrics: metrics::compute(text),
        readability: readability::compute(text),
        sentiment: sentiment::compute(text),
        structure: structure::compute(text),
        elements: elements::extract(text),
        quality: quality::compute(text),
    })
}
