use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::analysis::LinguisticProfile;
use crate::feedback::FeedbackBundle;
use crate::rubric::ScoreReport;
use crate::Evaluation;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a full evaluation as human-readable text.
pub fn format_evaluation(eval: &Evaluation, use_colors: bool, include_profile: bool) -> String {
    let mut sections = vec![
        format_report(&eval.report, use_colors),
        format_feedback(&eval.feedback, use_colors),
    ];
    if include_profile {
        sections.push(format_profile(&eval.profile));
    }
    sections.join("\n\n")
}

/// Format the overall line plus the per-category breakdown.
pub fn format_report(report: &ScoreReport, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let headline = format!("Overall: {}/100 ({})", report.overall, report.performance);
    if use_colors {
        lines.push(format!("{}", headline.bold()));
    } else {
        lines.push(headline);
    }
    lines.push(format!(
        "Bonus: {:+.0}  Penalty: {:+.0}",
        report.bonus_total, report.penalty_total
    ));
    lines.push(String::new());

    for cat in &report.category_scores {
        let row = format!(
            "  {:<16} {:>5.1}  (weight {:.2}, contributes {:+})",
            cat.category, cat.normalized_score, cat.weight, cat.contribution
        );
        if use_colors {
            lines.push(match cat.performance {
                "Excellent" | "Good" => format!("{}", row.green()),
                "Satisfactory" => format!("{}", row.yellow()),
                _ => format!("{}", row.red()),
            });
        } else {
            lines.push(row);
        }
    }

    lines.join("\n")
}

pub fn format_feedback(feedback: &FeedbackBundle, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if !feedback.strengths.is_empty() {
        lines.push(heading("Strengths", use_colors));
        for s in &feedback.strengths {
            lines.push(format!("  + {s}"));
        }
    }
    if !feedback.improvements.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(heading("Improvements", use_colors));
        for s in &feedback.improvements {
            lines.push(format!("  - {s}"));
        }
    }
    if let Some(details) = &feedback.detailed_by_aspect {
        for detail in details {
            lines.push(String::new());
            lines.push(heading(&detail.aspect, use_colors));
            lines.push(format!("  {}", detail.overview));
            for exercise in &detail.exercises {
                lines.push(format!("  * {exercise}"));
            }
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(feedback.summary.to_string());

    lines.join("\n")
}

/// Format the descriptive profile for `--profile` output.
pub fn format_profile(profile: &LinguisticProfile) -> String {
    let m = &profile.metrics;
    let mut lines = vec![
        "Profile".to_string(),
        format!(
            "  {} words, {} sentences, {} paragraphs ({} unique words, diversity {:.2})",
            m.word_count,
            m.sentence_count,
            m.paragraph_count,
            m.unique_words,
            m.vocabulary_diversity
        ),
        format!(
            "  Readability: {:.1} ({}), grade level {:.1}",
            profile.readability.flesch_reading_ease,
            profile.readability.interpretation,
            profile.readability.flesch_kincaid_grade
        ),
        format!(
            "  Sentiment: {} ({} positive / {} negative / {} neutral, confidence {:.2})",
            profile.sentiment.overall,
            profile.sentiment.positive,
            profile.sentiment.negative,
            profile.sentiment.neutral,
            profile.sentiment.confidence
        ),
        format!(
            "  Structure: {} (introduction: {}, conclusion: {}, transitions: {}, variety: {})",
            profile.structure.structure_score,
            yes_no(profile.structure.has_introduction),
            yes_no(profile.structure.has_conclusion),
            profile.structure.transition_count,
            profile.structure.sentence_variety
        ),
        format!(
            "  Debate elements: {} (balance: {})",
            profile.elements.quality_score, profile.elements.balance
        ),
    ];
    for hit in &profile.elements.hits {
        lines.push(format!(
            "    [{}] \"{}\" at offset {} via '{}'",
            hit.kind,
            truncate(&hit.sentence, 48),
            hit.offset,
            hit.indicator
        ));
    }
    lines.push(format!(
        "  Language quality: {} ({} double-space, {} capitalization, {} quote, {} repeated-word)",
        profile.quality.quality_score,
        profile.quality.double_spaces,
        profile.quality.missing_capitalization,
        profile.quality.unclosed_quotes,
        profile.quality.repeated_words
    ));
    for suggestion in &profile.quality.suggestions {
        lines.push(format!("    ! {suggestion}"));
    }
    lines.join("\n")
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", chars[..max_chars].iter().collect::<String>())
    }
}
