// Risk scorer
//
// Pure function mapping (message, optional context) to a RiskAssessment.
// Total over all inputs: any string, any or absent context, no error paths.

use crate::lexicon::{
    self, normalize, Lexicon, LexiconCategory, ABUSE_INDICATORS, EMOTIONAL_CRISIS_INDICATORS,
    IMMEDIACY_WORDS, ISOLATION_PHRASES, MEDIUM_CAP_PHRASES, MILD_SADNESS_PHRASES,
    SELF_HARM_INDICATORS, SPECIFIC_HIGH_RISK_PHRASES, SUBSTANCE_INDICATORS, SUBSTANCE_PHRASES,
    SUICIDE_INDICATORS, UNAMBIGUOUS_FALSE_POSITIVES,
};

use super::context::{is_escalating, prior_turns_mention_substance};
use super::tuning::*;
use super::types::{actions, factors, ConversationContext, RiskAssessment, RiskAssessmentDetail};

/// Lexicon-based risk scorer
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    lexicon: Lexicon,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a message, optionally in conversation context.
    pub fn assess(&self, message: &str, context: Option<&ConversationContext>) -> RiskAssessment {
        let raw = message.to_lowercase();
        let normalized = normalize(message);

        // False-positive short-circuit: unambiguous benign idioms score zero.
        let false_positives = self
            .lexicon
            .detect(LexiconCategory::FalsePositive, &raw, &normalized);
        if false_positives
            .iter()
            .any(|m| UNAMBIGUOUS_FALSE_POSITIVES.contains(&m.as_str()))
        {
            tracing::debug!("False-positive idiom, scoring zero: {:?}", false_positives);
            return benign_assessment();
        }

        let mut risk: f64 = 0.0;
        let mut confidence: f64 = BASE_CONFIDENCE;
        let mut detected: Vec<String> = Vec::new();
        let mut contextual_factors: Vec<String> = Vec::new();

        if !false_positives.is_empty() {
            contextual_factors.push(factors::POSSIBLE_FALSE_POSITIVE.to_string());
        }

        // High-risk matching
        let high = self
            .lexicon
            .detect(LexiconCategory::HighRisk, &raw, &normalized);
        if !high.is_empty() {
            risk = HIGH_RISK_FLOOR.max(high.len() as f64 * HIGH_RISK_PER_MATCH);
            confidence += HIGH_RISK_CONFIDENCE_BONUS;
            detected.extend(high);
        }

        // Medium-risk matching. Medium-cap phrases pin the score at the cap;
        // the specific-phrase override below is applied afterwards and wins.
        let medium = self
            .lexicon
            .detect(LexiconCategory::MediumRisk, &raw, &normalized);
        if !medium.is_empty() {
            if medium
                .iter()
                .any(|m| MEDIUM_CAP_PHRASES.contains(&m.as_str()))
            {
                risk = MEDIUM_ONLY_CAP;
            } else {
                risk = risk.max(MEDIUM_RISK_FLOOR.max(medium.len() as f64 * MEDIUM_RISK_PER_MATCH));
            }
            confidence += MEDIUM_RISK_CONFIDENCE_BONUS;
            detected.extend(medium);
        }

        // Contextual modifiers amplify when an immediacy word is among them
        let modifiers = self
            .lexicon
            .detect(LexiconCategory::ContextualModifier, &raw, &normalized);
        if modifiers
            .iter()
            .any(|m| IMMEDIACY_WORDS.contains(&m.as_str()))
        {
            risk = (risk + IMMEDIACY_OFFSET) * IMMEDIACY_MULTIPLIER;
            confidence += IMMEDIACY_CONFIDENCE_BONUS;
            contextual_factors.push(factors::IMMEDIACY_INDICATED.to_string());
        }

        // Specific-phrase override, guarding against category-list drift
        if lexicon::any_phrase_in(SPECIFIC_HIGH_RISK_PHRASES, &raw, &normalized) {
            risk = risk.max(SPECIFIC_PHRASE_FLOOR);
            confidence += SPECIFIC_PHRASE_CONFIDENCE_BONUS;
            contextual_factors.push(factors::DIRECT_CRISIS_LANGUAGE.to_string());
        }

        // Context-aware adjustment
        if let Some(ctx) = context {
            if is_escalating(ctx) {
                risk += ESCALATING_PATTERN_BONUS;
                contextual_factors.push(factors::ESCALATING_PATTERN.to_string());
            }

            if let Some(profile) = &ctx.profile {
                if matches!(profile.stress_level, Some(s) if s >= HIGH_STRESS_THRESHOLD) {
                    risk += HIGH_STRESS_BONUS;
                }
                if matches!(profile.emotional_regulation, Some(r) if r <= LOW_REGULATION_THRESHOLD)
                {
                    risk += LOW_REGULATION_BONUS;
                }
                if matches!(profile.crisis_risk_level, Some(c) if c >= CRISIS_HISTORY_THRESHOLD) {
                    risk += CRISIS_HISTORY_BONUS;
                    confidence += CRISIS_HISTORY_CONFIDENCE_BONUS;
                    contextual_factors.push(factors::PREVIOUS_CRISIS_HISTORY.to_string());
                }
            }

            let substance_now = lexicon::any_phrase_in(SUBSTANCE_PHRASES, &raw, &normalized);
            if substance_now || prior_turns_mention_substance(ctx) {
                risk += SUBSTANCE_USE_BONUS;
                confidence += SUBSTANCE_USE_CONFIDENCE_BONUS;
                contextual_factors.push(factors::SUBSTANCE_USE_MENTIONED.to_string());
            }

            if lexicon::any_phrase_in(ISOLATION_PHRASES, &raw, &normalized) {
                risk += ISOLATION_BONUS;
                contextual_factors.push(factors::SOCIAL_ISOLATION.to_string());
            }
        }

        // Low-risk override for mild sadness
        if risk < MILD_SADNESS_RISK_CEILING
            && lexicon::any_phrase_in(MILD_SADNESS_PHRASES, &raw, &normalized)
        {
            risk = (risk - MILD_SADNESS_REDUCTION).max(0.0);
            contextual_factors.push(factors::MILD_SADNESS_EXPRESSION.to_string());
        }

        let risk_level = risk.round().clamp(0.0, 10.0) as u8;
        let confidence = confidence.clamp(0.0, 1.0);
        let requires_intervention = risk_level >= INTERVENTION_THRESHOLD;

        if requires_intervention {
            tracing::warn!(
                risk_level,
                keywords = ?detected,
                "Crisis risk at intervention threshold"
            );
        } else {
            tracing::debug!(risk_level, factors = ?contextual_factors, "Message scored");
        }

        RiskAssessment {
            risk_level,
            confidence,
            detail: build_detail(&detected),
            immediate_actions: actions_for(risk_level),
            detected_keywords: detected,
            contextual_factors,
            requires_intervention,
            escalation_required: requires_intervention,
        }
    }
}

/// Zero-risk assessment for an unambiguous benign idiom
fn benign_assessment() -> RiskAssessment {
    RiskAssessment {
        risk_level: 0,
        confidence: FALSE_POSITIVE_CONFIDENCE,
        detected_keywords: Vec::new(),
        contextual_factors: vec![factors::POSSIBLE_FALSE_POSITIVE.to_string()],
        requires_intervention: false,
        escalation_required: false,
        immediate_actions: Vec::new(),
        detail: RiskAssessmentDetail::default(),
    }
}

/// Re-scan the matched keyword set against the category-defining subsets.
/// Sub-scores are fixed; they explain the composite score, not compose it.
fn build_detail(detected: &[String]) -> RiskAssessmentDetail {
    let mut detail = RiskAssessmentDetail::default();
    let has = |list: &[&str]| detected.iter().any(|k| list.contains(&k.as_str()));

    if has(SUICIDE_INDICATORS) {
        detail.suicide_risk = SUICIDE_SUBSCORE;
        detail
            .reasoning
            .push("Suicidal ideation language detected".to_string());
    }
    if has(SELF_HARM_INDICATORS) {
        detail.self_harm_risk = SELF_HARM_SUBSCORE;
        detail
            .reasoning
            .push("Self-harm language detected".to_string());
    }
    if has(SUBSTANCE_INDICATORS) {
        detail.substance_abuse_risk = SUBSTANCE_SUBSCORE;
        detail
            .reasoning
            .push("Substance misuse language detected".to_string());
    }
    if has(ABUSE_INDICATORS) {
        detail.abuse_situation_risk = ABUSE_SUBSCORE;
        detail
            .reasoning
            .push("Abusive-situation language detected".to_string());
    }
    if has(EMOTIONAL_CRISIS_INDICATORS) {
        detail.emotional_crisis_risk = EMOTIONAL_CRISIS_SUBSCORE;
        detail
            .reasoning
            .push("Acute emotional distress language detected".to_string());
    }

    detail
}

/// Action tags by risk bucket
fn actions_for(risk_level: u8) -> Vec<String> {
    let tags: &[&str] = match risk_level {
        8..=u8::MAX => &[
            actions::PROVIDE_CRISIS_RESOURCES,
            actions::EXPRESS_IMMEDIATE_SUPPORT,
            actions::ENCOURAGE_PROFESSIONAL_HELP,
            actions::SUGGEST_SAFETY_PLANNING,
            actions::ESCALATE_TO_HUMAN,
        ],
        6..=7 => &[
            actions::PROVIDE_SUPPORT_RESOURCES,
            actions::VALIDATE_FEELINGS,
            actions::SUGGEST_COPING_STRATEGIES,
            actions::MONITOR_CLOSELY,
        ],
        4..=5 => &[
            actions::ACKNOWLEDGE_DIFFICULTY,
            actions::PROVIDE_EMOTIONAL_SUPPORT,
            actions::EXPLORE_SUPPORT_SYSTEM,
        ],
        _ => &[],
    };
    tags.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::{ConversationTurn, Speaker, UserProfile};
    use chrono::Utc;

    fn scorer() -> RiskScorer {
        RiskScorer::new()
    }

    fn user_turn(message: &str, tone: Option<&str>) -> ConversationTurn {
        ConversationTurn {
            message: message.to_string(),
            speaker: Speaker::User,
            timestamp: Utc::now(),
            emotional_tone: tone.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_high_risk_phrase_reaches_intervention() {
        for msg in ["I want to kill myself", "I will end my life", "i just want to die"] {
            let a = scorer().assess(msg, None);
            assert!(a.risk_level >= 8, "{msg} scored {}", a.risk_level);
            assert!(a.requires_intervention);
            assert!(a.escalation_required);
        }
    }

    #[test]
    fn test_unambiguous_false_positives_score_zero() {
        for msg in [
            "I need to kill time before my appointment",
            "I'm dying to know the results",
            "dead tired after the gym",
            "traffic is killing me today",
        ] {
            let a = scorer().assess(msg, None);
            assert_eq!(a.risk_level, 0, "{msg}");
            assert!((a.confidence - FALSE_POSITIVE_CONFIDENCE).abs() < f64::EPSILON);
            assert!(a
                .contextual_factors
                .contains(&factors::POSSIBLE_FALSE_POSITIVE.to_string()));
            assert!(a.detected_keywords.is_empty());
            assert!(a.immediate_actions.is_empty());
        }
    }

    #[test]
    fn test_ambiguous_false_positive_still_scored() {
        // "killing me" alone is ambiguous; crisis language beside it wins
        let a = scorer().assess("my job is killing me and i want to kill myself", None);
        assert!(a.risk_level >= 8);
        assert!(a
            .contextual_factors
            .contains(&factors::POSSIBLE_FALSE_POSITIVE.to_string()));
    }

    #[test]
    fn test_immediacy_amplifies() {
        let plain = scorer().assess("I want to kill myself", None);
        let urgent = scorer().assess("I want to kill myself tonight", None);
        assert!(urgent.risk_level >= 9);
        assert!(urgent.risk_level >= plain.risk_level);
        assert!(urgent
            .contextual_factors
            .contains(&factors::IMMEDIACY_INDICATED.to_string()));
    }

    #[test]
    fn test_medium_risk_band() {
        let a = scorer().assess("I feel hopeless and trapped", None);
        assert!((4..=7).contains(&a.risk_level), "scored {}", a.risk_level);
        assert!(!a.requires_intervention);
        assert!(a.detected_keywords.contains(&"hopeless".to_string()));
    }

    #[test]
    fn test_medium_cap_pins_score_at_six() {
        let a = scorer().assess(
            "life has no meaning, i feel hopeless, worthless and trapped",
            None,
        );
        assert_eq!(a.risk_level, 6);
    }

    #[test]
    fn test_specific_override_wins_over_medium_cap() {
        let a = scorer().assess("life has no meaning and I want to kill myself", None);
        assert!(a.risk_level >= 8);
        assert!(a
            .contextual_factors
            .contains(&factors::DIRECT_CRISIS_LANGUAGE.to_string()));
    }

    #[test]
    fn test_mild_sadness_reduction() {
        let a = scorer().assess("just feeling down, had a rough day", None);
        assert!(a.risk_level <= 2, "scored {}", a.risk_level);
        assert!(a
            .contextual_factors
            .contains(&factors::MILD_SADNESS_EXPRESSION.to_string()));
    }

    #[test]
    fn test_bounds_hold_for_arbitrary_input() {
        for msg in [
            "",
            "   ",
            "hello",
            "kill myself kill myself kill myself tonight right now",
            "😀😀😀",
            "a very long and entirely mundane message about gardening and soup recipes",
        ] {
            let a = scorer().assess(msg, None);
            assert!(a.risk_level <= 10);
            assert!((0.0..=1.0).contains(&a.confidence), "{msg}");
        }
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let mut ctx = ConversationContext::new("u1");
        ctx.turns = vec![user_turn("feeling sad", Some("sad"))];
        let first = scorer().assess("I feel hopeless tonight", Some(&ctx));
        let second = scorer().assess("I feel hopeless tonight", Some(&ctx));
        assert_eq!(first, second);
    }

    #[test]
    fn test_escalating_tone_sequence_adds_factor() {
        let mut ctx = ConversationContext::new("u1");
        ctx.turns = vec![
            user_turn("i've been feeling sad", Some("sad")),
            user_turn("it all feels pointless", Some("hopeless")),
        ];
        let a = scorer().assess("everything is overwhelming", Some(&ctx));
        assert!(a
            .contextual_factors
            .contains(&factors::ESCALATING_PATTERN.to_string()));
    }

    #[test]
    fn test_profile_history_adds_factor_and_confidence() {
        let mut ctx = ConversationContext::new("u1");
        ctx.profile = Some(UserProfile {
            crisis_risk_level: Some(7),
            ..Default::default()
        });
        let with = scorer().assess("I feel hopeless", Some(&ctx));
        let without = scorer().assess("I feel hopeless", None);
        assert!(with
            .contextual_factors
            .contains(&factors::PREVIOUS_CRISIS_HISTORY.to_string()));
        assert!(with.confidence > without.confidence);
        assert!(with.risk_level >= without.risk_level);
    }

    #[test]
    fn test_substance_in_prior_turn_adds_factor() {
        let mut ctx = ConversationContext::new("u1");
        ctx.turns = vec![user_turn("i've been drinking every night", None)];
        let a = scorer().assess("I can't take it anymore", Some(&ctx));
        assert!(a
            .contextual_factors
            .contains(&factors::SUBSTANCE_USE_MENTIONED.to_string()));
    }

    #[test]
    fn test_detail_subscores_follow_matched_categories() {
        let a = scorer().assess("I want to kill myself and I've been cutting myself", None);
        assert_eq!(a.detail.suicide_risk, SUICIDE_SUBSCORE);
        assert_eq!(a.detail.self_harm_risk, SELF_HARM_SUBSCORE);
        assert_eq!(a.detail.abuse_situation_risk, 0);
        assert_eq!(a.detail.reasoning.len(), 2);
    }

    #[test]
    fn test_action_buckets() {
        let severe = scorer().assess("I want to kill myself", None);
        assert!(severe
            .immediate_actions
            .contains(&actions::ESCALATE_TO_HUMAN.to_string()));

        let moderate = scorer().assess("I feel hopeless and trapped", None);
        assert!(moderate
            .immediate_actions
            .contains(&actions::MONITOR_CLOSELY.to_string()));

        let calm = scorer().assess("nice weather today, went for a walk", None);
        // "today" is an immediacy modifier: (0 + 3) x 1.4 rounds to 4
        assert!(calm.risk_level <= 5);
    }
}
