// Response data types

use serde::{Deserialize, Serialize};

/// How urgently a resource applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Immediate,
    Urgent,
    Supportive,
}

/// An external help resource offered to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisResource {
    /// Kind of resource ("hotline", "text_line", "emergency", ...)
    pub resource_type: String,
    pub name: String,
    pub contact: String,
    pub description: String,
    pub availability: String,
    pub urgency: UrgencyLevel,
}

/// Structured safety plan handed to a user in acute risk. Content is
/// static guidance, not derived from the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyPlan {
    pub coping_strategies: Vec<String>,
    pub support_contacts: Vec<String>,
    pub professional_contacts: Vec<String>,
    pub warning_signs: Vec<String>,
    pub environment_safety: Vec<String>,
    pub follow_up_timeline: String,
}

/// Metadata attached to a generated response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub response_time_ms: u64,
    pub escalation_triggered: bool,
    pub resource_count: usize,
}

/// A safety-appropriate reply with resources and optional safety plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisResponse {
    pub message: String,
    pub resources: Vec<CrisisResource>,
    pub follow_up_required: bool,
    pub human_escalation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_plan: Option<SafetyPlan>,
    pub metadata: ResponseMetadata,
}
