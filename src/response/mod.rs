// Response module
// Tiered crisis responses, resource directory, safety plans

mod generator;
mod resources;
mod types;

pub use generator::{default_safety_plan, ResponseGenerator};
pub use resources::{immediate_resources, resources_for};
pub use types::{CrisisResource, CrisisResponse, ResponseMetadata, SafetyPlan, UrgencyLevel};
