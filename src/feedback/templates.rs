//! Fixed English feedback copy. Localization happens downstream.

pub const STRENGTHS: &[(&str, &[&str])] = &[
    (
        "argumentation",
        &[
            "Your main argument is clearly stated and well-supported",
            "Excellent use of logical reasoning to build your case",
            "Strong evidence provided to support your claims",
            "Good job connecting your points to the main thesis",
        ],
    ),
    (
        "delivery",
        &[
            "Clear and engaging writing style",
            "Good variation in sentence structure",
            "Confident tone throughout the response",
            "Effective use of transitions between ideas",
        ],
    ),
    (
        "rebuttal",
        &[
            "Thoughtful consideration of opposing viewpoints",
            "Strong counterarguments that strengthen your position",
            "Respectful acknowledgment of different perspectives",
            "Effective refutation of potential objections",
        ],
    ),
    (
        "structure",
        &[
            "Well-organized response with clear sections",
            "Strong introduction that sets up your argument",
            "Logical flow from point to point",
            "Compelling conclusion that reinforces your thesis",
        ],
    ),
];

pub const IMPROVEMENTS: &[(&str, &[&str])] = &[
    (
        "argumentation",
        &[
            "Try to include more specific examples or data",
            "Strengthen the logical connections between your points",
            "Consider addressing potential weaknesses in your argument",
            "Develop your supporting points more thoroughly",
        ],
    ),
    (
        "delivery",
        &[
            "Vary your sentence length for better rhythm",
            "Use more precise vocabulary to express your ideas",
            "Work on maintaining a consistent tone",
            "Add more transitional phrases to improve flow",
        ],
    ),
    (
        "rebuttal",
        &[
            "Anticipate and address more counterarguments",
            "Strengthen your responses to opposing views",
            "Acknowledge valid points from the other side",
            "Use evidence to refute opposing claims",
        ],
    ),
    (
        "structure",
        &[
            "Create a clearer roadmap in your introduction",
            "Improve transitions between main points",
            "Ensure each paragraph has a clear purpose",
            "Strengthen your conclusion with a call to action",
        ],
    ),
];

pub const ENCOURAGEMENT_EXCELLENT: &[&str] = &[
    "Outstanding work! Your debate skills are really shining through.",
    "Excellent performance! You're mastering the art of argumentation.",
    "Brilliant job! Your arguments are compelling and well-structured.",
];

pub const ENCOURAGEMENT_GOOD: &[&str] = &[
    "Good effort! You're showing solid debate skills.",
    "Well done! Your arguments are developing nicely.",
    "Nice work! Keep building on these strengths.",
];

pub const ENCOURAGEMENT_DEVELOPING: &[&str] = &[
    "Keep practicing! Every debate helps you improve.",
    "You're on the right track! Focus on the suggestions for growth.",
    "Good start! With practice, your skills will continue to develop.",
];

/// Appended deterministically whenever the response is under the short-word
/// threshold, independent of category outcomes.
pub const SHORT_RESPONSE_SUGGESTION: &str =
    "Aim for at least 150-200 words to fully develop your points.";

pub const EXERCISES: &[(&str, &[&str])] = &[
    (
        "argumentation",
        &[
            "Practice the PEEL method: Point, Evidence, Explanation, Link",
            "Create argument maps for complex topics",
            "Study logical fallacies to avoid them",
        ],
    ),
    (
        "delivery",
        &[
            "Read your response aloud to check flow",
            "Practice varying sentence lengths",
            "Study powerful speeches for inspiration",
        ],
    ),
    (
        "rebuttal",
        &[
            "Practice steel-manning (presenting the strongest version of opposing arguments)",
            "Create a rebuttal bank for common arguments",
            "Study successful debate rebuttals",
        ],
    ),
    (
        "structure",
        &[
            "Create outlines before writing",
            "Practice the hamburger paragraph method",
            "Study essay structures from top debaters",
        ],
    ),
];

pub fn pool_for<'a>(table: &[(&str, &'a [&'a str])], category: &str) -> Option<&'a [&'a str]> {
    table
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, pool)| *pool)
}
