// Crisis resource directory
//
// Static ranked directory. Selection by risk tier: severe risk gets the
// immediate tier only, moderate gets immediate plus urgent, everything
// else gets supportive peer resources.

use once_cell::sync::Lazy;

use crate::assessment::tuning::INTERVENTION_THRESHOLD;

use super::types::{CrisisResource, UrgencyLevel};

/// Lower bound of the band that receives immediate + urgent resources
pub const URGENT_BAND_FLOOR: u8 = 6;

fn resource(
    resource_type: &str,
    name: &str,
    contact: &str,
    description: &str,
    availability: &str,
    urgency: UrgencyLevel,
) -> CrisisResource {
    CrisisResource {
        resource_type: resource_type.to_string(),
        name: name.to_string(),
        contact: contact.to_string(),
        description: description.to_string(),
        availability: availability.to_string(),
        urgency,
    }
}

/// The full directory, ordered most-urgent first
static DIRECTORY: Lazy<Vec<CrisisResource>> = Lazy::new(|| {
    vec![
        resource(
            "hotline",
            "988 Suicide & Crisis Lifeline",
            "Call or text 988",
            "Free, confidential crisis counseling",
            "24/7",
            UrgencyLevel::Immediate,
        ),
        resource(
            "text_line",
            "Crisis Text Line",
            "Text HOME to 741741",
            "Text-based crisis support with a trained counselor",
            "24/7",
            UrgencyLevel::Immediate,
        ),
        resource(
            "emergency",
            "Emergency Services",
            "Call 911",
            "Immediate emergency response if you are in danger right now",
            "24/7",
            UrgencyLevel::Immediate,
        ),
        resource(
            "helpline",
            "SAMHSA National Helpline",
            "1-800-662-4357",
            "Treatment referral and information for mental health and substance use",
            "24/7",
            UrgencyLevel::Urgent,
        ),
        resource(
            "hotline",
            "National Domestic Violence Hotline",
            "1-800-799-7233",
            "Confidential support for people in abusive situations",
            "24/7",
            UrgencyLevel::Urgent,
        ),
        resource(
            "helpline",
            "NAMI HelpLine",
            "1-800-950-6264",
            "Mental health information, referrals, and support",
            "Mon-Fri, 10am-10pm ET",
            UrgencyLevel::Supportive,
        ),
        resource(
            "peer_support",
            "7 Cups",
            "www.7cups.com",
            "Free emotional support from trained volunteer listeners",
            "24/7",
            UrgencyLevel::Supportive,
        ),
    ]
});

/// Resources for a risk level, ordered most-urgent first.
pub fn resources_for(risk_level: u8) -> Vec<CrisisResource> {
    let wanted: &[UrgencyLevel] = if risk_level >= INTERVENTION_THRESHOLD {
        &[UrgencyLevel::Immediate]
    } else if risk_level >= URGENT_BAND_FLOOR {
        &[UrgencyLevel::Immediate, UrgencyLevel::Urgent]
    } else {
        &[UrgencyLevel::Supportive]
    };

    DIRECTORY
        .iter()
        .filter(|r| wanted.contains(&r.urgency))
        .cloned()
        .collect()
}

/// The immediate tier alone, for the hard-coded fallback response.
pub fn immediate_resources() -> Vec<CrisisResource> {
    DIRECTORY
        .iter()
        .filter(|r| r.urgency == UrgencyLevel::Immediate)
        .cloned()
        .collect()
}
