// Tiered response generator
//
// Maps a risk level and optional display name to a CrisisResponse. Message
// tier by threshold, resources by urgency band, safety plan only at the
// intervention threshold. Template variant choice goes through an injected
// seedable RNG so tests can pin it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assessment::tuning::INTERVENTION_THRESHOLD;

use super::resources::{resources_for, URGENT_BAND_FLOOR};
use super::types::{CrisisResponse, ResponseMetadata, SafetyPlan};

/// Message tier thresholds
const SEVERE_TIER: u8 = 9;
const HIGH_TIER: u8 = 7;
const ELEVATED_TIER: u8 = 5;

/// Follow-up is requested from the moderate band upward
const FOLLOW_UP_FLOOR: u8 = URGENT_BAND_FLOOR;

/// Opening variants for the severe tier
static SEVERE_OPENINGS: &[&str] = &[
    "I'm really concerned about what you just shared. What you're feeling matters, and you deserve support right now.",
    "Thank you for telling me this. I'm taking it seriously, and I want to make sure you're safe right now.",
];

/// Opening variants for the high tier
static HIGH_OPENINGS: &[&str] = &[
    "I can tell you're carrying something very heavy right now.",
    "I can hear how much pain is behind what you're saying.",
];

pub struct ResponseGenerator {
    rng: StdRng,
}

impl ResponseGenerator {
    /// Generator with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for deterministic template choice
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the tiered response for a risk level.
    pub fn generate(&mut self, risk_level: u8, display_name: Option<&str>) -> CrisisResponse {
        let message = self.message_for(risk_level, display_name);
        let resources = resources_for(risk_level);
        let safety_plan = (risk_level >= INTERVENTION_THRESHOLD).then(default_safety_plan);

        CrisisResponse {
            metadata: ResponseMetadata {
                response_time_ms: 0,
                escalation_triggered: false,
                resource_count: resources.len(),
            },
            message,
            resources,
            follow_up_required: risk_level >= FOLLOW_UP_FLOOR,
            human_escalation: risk_level >= INTERVENTION_THRESHOLD,
            safety_plan,
        }
    }

    fn message_for(&mut self, risk_level: u8, display_name: Option<&str>) -> String {
        let salutation = match display_name {
            Some(name) => format!("{name}, "),
            None => String::new(),
        };

        if risk_level >= SEVERE_TIER {
            let opening = self.pick(SEVERE_OPENINGS);
            format!(
                "{salutation}{opening}\n\n\
                Please reach out to someone who can help immediately. The 988 Suicide & Crisis \
                Lifeline is free and available 24/7 - call or text 988. If you can't talk out \
                loud, text HOME to 741741 to reach the Crisis Text Line. If you are in immediate \
                danger, please call 911.\n\n\
                You don't have to get through this moment alone. I'll stay here with you, and a \
                human member of our care team is being notified so someone can follow up with you."
            )
        } else if risk_level >= HIGH_TIER {
            let opening = self.pick(HIGH_OPENINGS);
            format!(
                "{salutation}{opening} I'm glad you told me instead of holding it in.\n\n\
                Talking to someone trained in moments like this can genuinely help. The 988 \
                Lifeline (call or text 988) is available around the clock, and the Crisis Text \
                Line is there if texting feels easier - text HOME to 741741.\n\n\
                Would you like to talk through what's weighing on you the most right now?"
            )
        } else if risk_level >= ELEVATED_TIER {
            format!(
                "{salutation}I hear you - that sounds genuinely hard, and it makes sense that \
                you're feeling worn down by it.\n\n\
                You don't have to manage everything at once. Sometimes it helps to talk with \
                someone outside the situation - a counselor, a support line, or someone you \
                trust. I can share some options whenever you want them.\n\n\
                What's been the hardest part of today?"
            )
        } else {
            format!(
                "{salutation}Thank you for sharing that with me. I'm listening.\n\n\
                If it would help to talk more about how you're feeling, I'm here for that - and \
                there are supportive people and communities I can point you to as well."
            )
        }
    }

    fn pick(&mut self, variants: &[&'static str]) -> &'static str {
        variants[self.rng.gen_range(0..variants.len())]
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed safety plan offered at the intervention threshold.
pub fn default_safety_plan() -> SafetyPlan {
    let lines = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    SafetyPlan {
        coping_strategies: lines(&[
            "Ground yourself: name 5 things you can see, 4 you can touch, 3 you can hear",
            "Slow breathing: in for 4 counts, hold for 4, out for 6",
            "Hold something cold, like ice or a cold washcloth",
            "Step outside or move to a different room",
        ]),
        support_contacts: lines(&[
            "A trusted friend or family member you can call tonight",
            "Someone who can stay with you or check in regularly",
        ]),
        professional_contacts: lines(&[
            "988 Suicide & Crisis Lifeline - call or text 988",
            "Crisis Text Line - text HOME to 741741",
            "Your therapist or doctor, if you have one",
        ]),
        warning_signs: lines(&[
            "Feeling like a burden to the people around you",
            "Withdrawing from friends and family",
            "Giving away possessions or saying goodbyes",
            "Making a plan or gathering means",
        ]),
        environment_safety: lines(&[
            "Ask someone to hold onto anything you could use to hurt yourself",
            "Avoid alcohol and drugs while you're feeling this way",
            "Stay around other people when the feelings are strongest",
        ]),
        follow_up_timeline: "Check in with a crisis counselor or professional within 24 hours, \
            and with someone you trust every day this week"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::types::UrgencyLevel;

    #[test]
    fn test_safety_plan_only_at_intervention_threshold() {
        let mut generator = ResponseGenerator::with_seed(7);
        for level in 0..=10u8 {
            let response = generator.generate(level, None);
            assert_eq!(
                response.safety_plan.is_some(),
                level >= INTERVENTION_THRESHOLD,
                "level {level}"
            );
        }
    }

    #[test]
    fn test_severe_tier_lists_crisis_lines() {
        let mut generator = ResponseGenerator::with_seed(7);
        let response = generator.generate(9, None);
        assert!(response.message.contains("988"));
        assert!(response.message.contains("741741"));
        assert!(response.message.contains("911"));
        assert!(response.human_escalation);
    }

    #[test]
    fn test_name_personalization() {
        let mut generator = ResponseGenerator::with_seed(7);
        let response = generator.generate(9, Some("Sam"));
        assert!(response.message.starts_with("Sam, "));
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let first = ResponseGenerator::with_seed(42).generate(9, None);
        let second = ResponseGenerator::with_seed(42).generate(9, None);
        assert_eq!(first.message, second.message);
    }

    #[test]
    fn test_resource_tiers_follow_risk() {
        let mut generator = ResponseGenerator::with_seed(7);

        let severe = generator.generate(9, None);
        assert!(severe
            .resources
            .iter()
            .all(|r| r.urgency == UrgencyLevel::Immediate));

        let moderate = generator.generate(6, None);
        assert!(moderate
            .resources
            .iter()
            .any(|r| r.urgency == UrgencyLevel::Urgent));

        let low = generator.generate(2, None);
        assert!(low
            .resources
            .iter()
            .all(|r| r.urgency == UrgencyLevel::Supportive));
        assert!(!low.human_escalation);
        assert!(low.safety_plan.is_none());
    }

    #[test]
    fn test_resource_count_matches_metadata() {
        let mut generator = ResponseGenerator::with_seed(7);
        let response = generator.generate(8, None);
        assert_eq!(response.metadata.resource_count, response.resources.len());
    }
}
