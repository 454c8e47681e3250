// Assessment module
// Risk scoring over normalized messages and conversation context

mod context;
mod scorer;
pub mod tuning;
mod types;

pub use scorer::RiskScorer;
pub use types::{
    actions, factors, ConversationContext, ConversationTurn, RiskAssessment, RiskAssessmentDetail,
    Speaker, UserProfile,
};
