// Scoring constants
//
// Empirically tuned thresholds. Values are load-bearing for the scenario
// suite; revisit them here without touching control flow in the scorer.

/// Starting confidence before any match bonuses
pub const BASE_CONFIDENCE: f64 = 0.5;

/// Confidence reported for an unambiguous false-positive short-circuit
pub const FALSE_POSITIVE_CONFIDENCE: f64 = 0.9;

/// High-risk matching: risk = max(floor, matches x per_match)
pub const HIGH_RISK_FLOOR: f64 = 8.0;
pub const HIGH_RISK_PER_MATCH: f64 = 5.0;
pub const HIGH_RISK_CONFIDENCE_BONUS: f64 = 0.3;

/// Medium-risk matching: risk = max(risk, max(floor, matches x per_match)),
/// unless a medium-cap phrase pins the score at MEDIUM_ONLY_CAP.
pub const MEDIUM_RISK_FLOOR: f64 = 4.0;
pub const MEDIUM_RISK_PER_MATCH: f64 = 3.5;
pub const MEDIUM_ONLY_CAP: f64 = 6.0;
pub const MEDIUM_RISK_CONFIDENCE_BONUS: f64 = 0.15;

/// Immediacy amplification: risk = (risk + offset) x multiplier
pub const IMMEDIACY_OFFSET: f64 = 3.0;
pub const IMMEDIACY_MULTIPLIER: f64 = 1.4;
pub const IMMEDIACY_CONFIDENCE_BONUS: f64 = 0.2;

/// Specific-phrase override. Applied after the medium cap; wins on conflict.
pub const SPECIFIC_PHRASE_FLOOR: f64 = 8.0;
pub const SPECIFIC_PHRASE_CONFIDENCE_BONUS: f64 = 0.25;

/// Context-aware adjustments
pub const ESCALATING_PATTERN_BONUS: f64 = 1.0;
pub const HIGH_STRESS_BONUS: f64 = 0.5;
pub const LOW_REGULATION_BONUS: f64 = 0.5;
pub const CRISIS_HISTORY_BONUS: f64 = 1.0;
pub const CRISIS_HISTORY_CONFIDENCE_BONUS: f64 = 0.15;
pub const SUBSTANCE_USE_BONUS: f64 = 1.0;
pub const SUBSTANCE_USE_CONFIDENCE_BONUS: f64 = 0.1;
pub const ISOLATION_BONUS: f64 = 0.5;

/// Profile thresholds for the context adjustments
pub const HIGH_STRESS_THRESHOLD: u8 = 8;
pub const LOW_REGULATION_THRESHOLD: u8 = 3;
pub const CRISIS_HISTORY_THRESHOLD: u8 = 5;

/// Mild-sadness reduction: applies only below the ceiling, floors at zero
pub const MILD_SADNESS_REDUCTION: f64 = 2.0;
pub const MILD_SADNESS_RISK_CEILING: f64 = 6.0;

/// Risk level at which intervention, escalation, and safety planning activate
pub const INTERVENTION_THRESHOLD: u8 = 8;

/// Fixed sub-scores assigned to triggered detail categories
pub const SUICIDE_SUBSCORE: u8 = 8;
pub const SELF_HARM_SUBSCORE: u8 = 7;
pub const SUBSTANCE_SUBSCORE: u8 = 7;
pub const ABUSE_SUBSCORE: u8 = 8;
pub const EMOTIONAL_CRISIS_SUBSCORE: u8 = 7;
