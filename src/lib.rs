//! Debate response scoring engine.
//!
//! Takes a free-text debate response and produces three artifacts:
//! a descriptive [`analysis::LinguisticProfile`], an evaluative
//! [`rubric::ScoreReport`] against a weighted rubric, and a templated
//! [`feedback::FeedbackBundle`]. [`evaluate`] runs all three; each layer is
//! also usable on its own.

pub mod analysis;
pub mod error;
pub mod feedback;
pub mod output;
pub mod rubric;

pub use analysis::{analyze, LinguisticProfile};
pub use error::EngineError;
pub use feedback::{select_feedback, FeedbackBundle};
pub use rubric::{score, Rubric, RubricDefinition, ScoreReport};

use rand::Rng;
use serde::Serialize;

/// A response awaiting evaluation. `language` is carried through for
/// downstream consumers; analysis and scoring are English-only.
#[derive(Debug, Clone)]
pub struct ResponseText {
    pub body: String,
    pub language: String,
}

impl ResponseText {
    pub fn new(body: impl Into<String>, language: impl Into<String>) -> Result<Self, EngineError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(EngineError::EmptyResponse);
        }
        Ok(Self {
            body,
            language: language.into(),
        })
    }
}

/// Everything the engine produces for one response.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub profile: LinguisticProfile,
    pub report: ScoreReport,
    pub feedback: FeedbackBundle,
}

/// Run the full pipeline: profile, score, feedback.
///
/// The random source only influences which feedback template is drawn from
/// each pool; seed it for reproducible runs.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResponse`] for empty or whitespace-only text.
pub fn evaluate<R: Rng>(
    text: &str,
    rubric: &Rubric,
    rng: &mut R,
) -> Result<Evaluation, EngineError> {
    let profile = analysis::analyze(text)?;
    let report = rubric::score(text, rubric)?;
    let feedback = feedback::select_feedback(&report, profile.metrics.word_count, rng);

    Ok(Evaluation {
        profile,
        report,
        feedback,
    })
}
