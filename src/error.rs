use thiserror::Error;

/// Errors the engine can produce. Degenerate-but-nonempty text (no detected
/// words or sentences) is not an error; analyzers return zeroed values for it.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The response text was empty or whitespace-only.
    #[error("response text is empty or whitespace-only")]
    EmptyResponse,

    /// The rubric definition failed load-time validation. Carries every
    /// validation error at once, not just the first.
    #[error("invalid rubric configuration: {}", .0.join("; "))]
    Configuration(Vec<String>),
}
