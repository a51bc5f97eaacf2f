use serde::Serialize;

use super::{lexicon, segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Claim,
    Evidence,
    Reasoning,
    Counterargument,
    Concession,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Claim => write!(f, "claim"),
            ElementKind::Evidence => write!(f, "evidence"),
            ElementKind::Reasoning => write!(f, "reasoning"),
            ElementKind::Counterargument => write!(f, "counterargument"),
            ElementKind::Concession => write!(f, "concession"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Balance {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "adequate")]
    Adequate,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Balance::Excellent => write!(f, "excellent"),
            Balance::Good => write!(f, "good"),
            Balance::Adequate => write!(f, "adequate"),
            Balance::NeedsImprovement => write!(f, "needs improvement"),
        }
    }
}

/// One indicator phrase found inside one sentence. The offset is the byte
/// position of the (trimmed) sentence in the full response, taken from the
/// segmentation span rather than a substring search, so repeated sentences
/// keep distinct positions.
#[derive(Debug, Clone, Serialize)]
pub struct ElementHit {
    pub kind: ElementKind,
    pub indicator: &'static str,
    pub sentence: String,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DebateElements {
    pub hits: Vec<ElementHit>,
    pub quality_score: u32,
    pub balance: Balance,
}

impl DebateElements {
    pub fn count(&self, kind: ElementKind) -> usize {
        self.hits.iter().filter(|h| h.kind == kind).count()
    }
}

/// Scan every sentence for case-insensitive substring containment of each
/// indicator phrase. Containment is deliberately not boundary-aware.
pub fn extract(text: &str) -> DebateElements {
    let mut hits = Vec::new();

    for span in segment::sentence_spans(text) {
        let sentence = span.text(text);
        let lowered = sentence.to_lowercase();
        for &(kind, indicators) in lexicon::ELEMENT_INDICATORS {
            for &indicator in indicators {
                if lowered.contains(indicator) {
                    hits.push(ElementHit {
                        kind,
                        indicator,
                        sentence: sentence.to_string(),
                        offset: span.start,
                    });
                }
            }
        }
    }

    let claims = count_of(&hits, ElementKind::Claim);
    let evidence = count_of(&hits, ElementKind::Evidence);
    let reasoning = count_of(&hits, ElementKind::Reasoning);
    let counters = count_of(&hits, ElementKind::Counterargument);
    let concessions = count_of(&hits, ElementKind::Concession);

    let quality_score = (claims * 10 + evidence * 15 + reasoning * 10 + counters * 15
        + concessions * 10)
        .min(100) as u32;

    let balance = assess_balance(claims, evidence, reasoning, counters, concessions);

    DebateElements {
        hits,
        quality_score,
        balance,
    }
}

fn count_of(hits: &[ElementHit], kind: ElementKind) -> usize {
    hits.iter().filter(|h| h.kind == kind).count()
}

fn assess_balance(
    claims: usize,
    evidence: usize,
    reasoning: usize,
    counters: usize,
    concessions: usize,
) -> Balance {
    let core = claims > 0 && evidence > 0 && reasoning > 0;
    if core && counters > 0 && concessions > 0 {
        Balance::Excellent
    } else if core && (counters > 0 || concessions > 0) {
        Balance::Good
    } else if core {
        Balance::Adequate
    } else {
        Balance::NeedsImprovement
    }
}
