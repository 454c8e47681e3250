// Assessment data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single prior turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub message: String,
    pub speaker: Speaker,
    pub timestamp: DateTime<Utc>,
    /// Tone label assigned by the session layer, if any ("sad", "hopeless", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotional_tone: Option<String>,
}

/// Snapshot of the user profile maintained by the session layer.
/// All scales are 1-10; absent means unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_system_strength: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_risk_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotional_regulation: Option<u8>,
}

/// Conversation context assembled by the caller. The engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Prior turns, oldest first
    #[serde(default)]
    pub turns: Vec<ConversationTurn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ConversationContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: None,
            turns: Vec::new(),
            profile: None,
            display_name: None,
        }
    }
}

/// Per-category breakdown of a risk assessment. Explanatory only: the
/// composite `risk_level` is the single number other components act on,
/// and sub-scores need not sum to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentDetail {
    pub suicide_risk: u8,
    pub self_harm_risk: u8,
    pub substance_abuse_risk: u8,
    pub abuse_situation_risk: u8,
    pub medical_emergency_risk: u8,
    pub emotional_crisis_risk: u8,
    /// Human-readable reasoning, one line per triggered category
    pub reasoning: Vec<String>,
}

/// Result of scoring one message in context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composite danger score, 0-10
    pub risk_level: u8,
    /// Scoring confidence, 0.0-1.0
    pub confidence: f64,
    /// Distinct lexicon phrases that matched
    pub detected_keywords: Vec<String>,
    /// Short factor tags ("immediacy_indicated", ...)
    pub contextual_factors: Vec<String>,
    pub requires_intervention: bool,
    pub escalation_required: bool,
    /// Ordered action tags derived from the risk bucket
    pub immediate_actions: Vec<String>,
    pub detail: RiskAssessmentDetail,
}

/// Factor tags attached to assessments
pub mod factors {
    pub const POSSIBLE_FALSE_POSITIVE: &str = "possible_false_positive";
    pub const IMMEDIACY_INDICATED: &str = "immediacy_indicated";
    pub const DIRECT_CRISIS_LANGUAGE: &str = "direct_crisis_language";
    pub const ESCALATING_PATTERN: &str = "escalating_pattern";
    pub const PREVIOUS_CRISIS_HISTORY: &str = "previous_crisis_history";
    pub const SUBSTANCE_USE_MENTIONED: &str = "substance_use_mentioned";
    pub const SOCIAL_ISOLATION: &str = "social_isolation";
    pub const MILD_SADNESS_EXPRESSION: &str = "mild_sadness_expression";
}

/// Action tags derived from the risk bucket
pub mod actions {
    pub const PROVIDE_CRISIS_RESOURCES: &str = "provide_crisis_resources";
    pub const EXPRESS_IMMEDIATE_SUPPORT: &str = "express_immediate_support";
    pub const ENCOURAGE_PROFESSIONAL_HELP: &str = "encourage_professional_help";
    pub const SUGGEST_SAFETY_PLANNING: &str = "suggest_safety_planning";
    pub const ESCALATE_TO_HUMAN: &str = "escalate_to_human";
    pub const PROVIDE_SUPPORT_RESOURCES: &str = "provide_support_resources";
    pub const VALIDATE_FEELINGS: &str = "validate_feelings";
    pub const SUGGEST_COPING_STRATEGIES: &str = "suggest_coping_strategies";
    pub const MONITOR_CLOSELY: &str = "monitor_closely";
    pub const ACKNOWLEDGE_DIFFICULTY: &str = "acknowledge_difficulty";
    pub const PROVIDE_EMOTIONAL_SUPPORT: &str = "provide_emotional_support";
    pub const EXPLORE_SUPPORT_SYSTEM: &str = "explore_support_system";
}
