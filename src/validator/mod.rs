// Response safety validator
//
// Second, independent gate: screens outgoing AI-generated replies for
// minimizing, harmful, or inappropriate-advice language before delivery.
// Never applied to user input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Concern tags reported by the validator
pub mod concerns {
    pub const INAPPROPRIATE_ADVICE: &str = "inappropriate_advice";
    pub const CRISIS_MINIMIZATION: &str = "crisis_minimization";
    pub const HARMFUL_SUGGESTION: &str = "harmful_suggestion";
}

/// Remediation tags, one per concern family
pub mod remediations {
    pub const DEFER_TO_PROFESSIONAL_GUIDANCE: &str = "defer_to_professional_guidance";
    pub const VALIDATE_AND_TAKE_SERIOUSLY: &str = "validate_and_take_seriously";
    pub const REMOVE_HARMFUL_SUGGESTION: &str = "remove_harmful_suggestion";
}

/// A compiled outbound-text pattern with its concern metadata
struct ResponsePattern {
    regex: Regex,
    concern: &'static str,
    remediation: &'static str,
}

fn pattern(regex_str: &str, concern: &'static str, remediation: &'static str) -> ResponsePattern {
    ResponsePattern {
        regex: Regex::new(regex_str).expect("Invalid response safety pattern"),
        concern,
        remediation,
    }
}

/// Directive life advice the assistant must not give
static INAPPROPRIATE_ADVICE: Lazy<Vec<ResponsePattern>> = Lazy::new(|| {
    vec![
        pattern(
            r"(?i)\byou\s+should\s+(?:divorce|leave|quit|dump|break\s+up\s+with)\b",
            concerns::INAPPROPRIATE_ADVICE,
            remediations::DEFER_TO_PROFESSIONAL_GUIDANCE,
        ),
        pattern(
            r"(?i)\byou\s+(?:must|have\s+to)\s+(?:divorce|leave|quit|cut\s+(?:him|her|them)\s+off)\b",
            concerns::INAPPROPRIATE_ADVICE,
            remediations::DEFER_TO_PROFESSIONAL_GUIDANCE,
        ),
        pattern(
            r"(?i)\bjust\s+(?:leave|quit|divorce)\s+(?:him|her|them|your)\b",
            concerns::INAPPROPRIATE_ADVICE,
            remediations::DEFER_TO_PROFESSIONAL_GUIDANCE,
        ),
    ]
});

/// Language that minimizes a crisis
static CRISIS_MINIMIZATION: Lazy<Vec<ResponsePattern>> = Lazy::new(|| {
    vec![
        pattern(
            r"(?i)\bit(?:'s|\s+is)\s+not\s+that\s+bad\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\bsnap\s+out\s+of\s+it\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\b(?:just\s+)?get\s+over\s+it\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\bothers?\s+have\s+it\s+(?:much\s+)?worse\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\byou(?:'re|\s+are)\s+overreacting\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\bjust\s+(?:think\s+positive|cheer\s+up|be\s+happy)\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
        pattern(
            r"(?i)\bstop\s+being\s+(?:so\s+)?dramatic\b",
            concerns::CRISIS_MINIMIZATION,
            remediations::VALIDATE_AND_TAKE_SERIOUSLY,
        ),
    ]
});

/// Actively harmful suggestions
static HARMFUL_SUGGESTIONS: Lazy<Vec<ResponsePattern>> = Lazy::new(|| {
    vec![
        pattern(
            r"(?i)\b(?:alcohol|a\s+drink|a\s+few\s+drinks)\s+(?:might|could|would|will)\s+help\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
        pattern(
            r"(?i)\btherapy\s+(?:doesn't|does\s+not|won't)\s+(?:work|help)\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
        pattern(
            r"(?i)\bmedication\s+is\s+(?:useless|pointless|a\s+waste)\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
        pattern(
            r"(?i)\byou\s+don't\s+need\s+(?:a\s+)?(?:therapist|therapy|professional\s+help|medication)\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
        pattern(
            r"(?i)\b(?:don't|do\s+not)\s+tell\s+anyone\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
        pattern(
            r"(?i)\bkeep\s+(?:it|this)\s+to\s+yourself\b",
            concerns::HARMFUL_SUGGESTION,
            remediations::REMOVE_HARMFUL_SUGGESTION,
        ),
    ]
});

/// Result of validating one outbound reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyCheck {
    pub is_safe: bool,
    /// Matched concern tags, deduplicated per family
    pub concerns: Vec<String>,
    /// Remediation tags, one per concern
    pub remediations: Vec<String>,
}

/// Scan an outbound AI-generated reply against the three pattern
/// families. Total over all inputs; an empty reply is safe.
pub fn validate_response(text: &str) -> SafetyCheck {
    let mut concerns = Vec::new();
    let mut remediations = Vec::new();

    for family in [
        &*INAPPROPRIATE_ADVICE,
        &*CRISIS_MINIMIZATION,
        &*HARMFUL_SUGGESTIONS,
    ] {
        for p in family {
            if p.regex.is_match(text) && !concerns.iter().any(|c| c == p.concern) {
                concerns.push(p.concern.to_string());
                remediations.push(p.remediation.to_string());
            }
        }
    }

    if !concerns.is_empty() {
        tracing::warn!(?concerns, "Unsafe outbound reply blocked by validator");
    }

    SafetyCheck {
        is_safe: concerns.is_empty(),
        concerns,
        remediations,
    }
}
