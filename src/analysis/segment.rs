use once_cell::sync::Lazy;
use regex::Regex;

/// Half-open byte range into the original response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Whitespace-delimited tokens, empties filtered.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Sentence spans: the text is split on runs of `.`, `!`, `?`, each segment
/// is trimmed, and empty segments are dropped. Spans point at the trimmed
/// sentence within the original text, so element positions stay unambiguous
/// even when the same sentence appears twice.
pub fn sentence_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut seg_start = 0;
    for (idx, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            push_trimmed(text, seg_start, idx, &mut spans);
            seg_start = idx + ch.len_utf8();
        }
    }
    push_trimmed(text, seg_start, text.len(), &mut spans);
    spans
}

/// Trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|s| s.text(text))
        .collect()
}

/// Paragraphs: blocks separated by blank lines (two or more newlines),
/// trimmed, empties filtered.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Span>) {
    let raw = &text[start..end];
    let trimmed_start = raw.trim_start();
    let lead = raw.len() - trimmed_start.len();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return;
    }
    out.push(Span {
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}
