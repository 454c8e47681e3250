// Crisis event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of crisis categories for persisted events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisType {
    Suicide,
    SelfHarm,
    Abuse,
    Substance,
    EmotionalCrisis,
}

impl CrisisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisType::Suicide => "suicide",
            CrisisType::SelfHarm => "self_harm",
            CrisisType::Abuse => "abuse",
            CrisisType::Substance => "substance",
            CrisisType::EmotionalCrisis => "emotional_crisis",
        }
    }
}

/// Durable record of a crisis moment. Created once per qualifying message;
/// the resolution fields are filled in later by the external moderation
/// workflow, never by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisEvent {
    pub user_id: String,
    pub severity_level: u8,
    pub crisis_type: CrisisType,
    pub trigger_keywords: Vec<String>,
    pub context_summary: String,
    pub response_given: String,
    pub resources_provided: Vec<String>,
    pub human_notified: bool,
    pub follow_up_required: bool,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalated_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_time: Option<DateTime<Utc>>,
}

impl CrisisEvent {
    /// New unresolved event
    pub fn new(user_id: impl Into<String>, severity_level: u8, crisis_type: CrisisType) -> Self {
        Self {
            user_id: user_id.into(),
            severity_level,
            crisis_type,
            trigger_keywords: Vec::new(),
            context_summary: String::new(),
            response_given: String::new(),
            resources_provided: Vec::new(),
            human_notified: false,
            follow_up_required: false,
            resolved: false,
            resolution_notes: None,
            resolved_at: None,
            escalated_to: None,
            escalation_time: None,
        }
    }
}

/// Structured payload pushed to the human-notification capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationNotice {
    pub user_id: String,
    pub severity: u8,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
    pub context_summary: String,
}
