// Scenario tests for the scoring and response pipeline

use chrono::Utc;

use haven::assessment::{factors, ConversationContext, ConversationTurn, RiskScorer, Speaker};
use haven::response::{ResponseGenerator, UrgencyLevel};
use haven::validator::{concerns, validate_response};

fn user_turn(message: &str, tone: Option<&str>) -> ConversationTurn {
    ConversationTurn {
        message: message.to_string(),
        speaker: Speaker::User,
        timestamp: Utc::now(),
        emotional_tone: tone.map(|t| t.to_string()),
    }
}

#[test]
fn test_unambiguous_high_risk_reaches_intervention() {
    let scorer = RiskScorer::new();
    for msg in [
        "I want to kill myself",
        "I'm going to end my life",
        "i really just want to die",
    ] {
        let a = scorer.assess(msg, None);
        assert!(a.risk_level >= 8, "{msg} scored {}", a.risk_level);
        assert!(a.requires_intervention, "{msg}");
    }
}

#[test]
fn test_benign_idioms_score_zero() {
    let scorer = RiskScorer::new();
    for msg in [
        "I need to kill time before my appointment",
        "I'm dying to know the results",
        "dead tired after that shift",
        "this traffic is killing me",
    ] {
        let a = scorer.assess(msg, None);
        assert_eq!(a.risk_level, 0, "{msg}");
    }
}

#[test]
fn test_score_bounds_for_any_input() {
    let scorer = RiskScorer::new();
    let inputs = [
        "",
        " ",
        "kill myself want to die end my life tonight right now planning",
        "日本語のメッセージ",
        "asdf qwer zxcv",
    ];
    for msg in inputs {
        let a = scorer.assess(msg, None);
        assert!(a.risk_level <= 10, "{msg}");
        assert!((0.0..=1.0).contains(&a.confidence), "{msg}");
    }
}

#[test]
fn test_scoring_is_idempotent() {
    let scorer = RiskScorer::new();
    let mut ctx = ConversationContext::new("u1");
    ctx.turns = vec![user_turn("rough week", Some("sad"))];

    let first = scorer.assess("I feel hopeless tonight", Some(&ctx));
    let second = scorer.assess("I feel hopeless tonight", Some(&ctx));
    assert_eq!(first, second);
}

#[test]
fn test_severe_message_scenario() {
    let scorer = RiskScorer::new();
    let a = scorer.assess("I want to kill myself tonight", None);
    assert!(a.risk_level >= 9, "scored {}", a.risk_level);
    assert!(a
        .contextual_factors
        .contains(&factors::IMMEDIACY_INDICATED.to_string()));

    let mut generator = ResponseGenerator::with_seed(1);
    let response = generator.generate(a.risk_level, None);
    assert!(response.safety_plan.is_some());
    assert!(response
        .resources
        .iter()
        .any(|r| r.availability == "24/7" && r.resource_type == "hotline"));
}

#[test]
fn test_moderate_message_scenario() {
    let scorer = RiskScorer::new();
    let a = scorer.assess("I feel hopeless and trapped", None);
    assert!(
        (4..=7).contains(&a.risk_level),
        "scored {}",
        a.risk_level
    );

    let mut generator = ResponseGenerator::with_seed(1);
    let response = generator.generate(a.risk_level, None);
    assert!(response.safety_plan.is_none());
}

#[test]
fn test_safety_plan_iff_intervention_threshold() {
    let mut generator = ResponseGenerator::with_seed(1);
    for level in 0..=10u8 {
        let response = generator.generate(level, None);
        assert_eq!(response.safety_plan.is_some(), level >= 8, "level {level}");
    }
}

#[test]
fn test_immediate_tier_always_present_at_severe_risk() {
    let mut generator = ResponseGenerator::with_seed(1);
    for level in 8..=10u8 {
        let response = generator.generate(level, None);
        assert!(
            response
                .resources
                .iter()
                .any(|r| r.urgency == UrgencyLevel::Immediate),
            "level {level}"
        );
    }
}

#[test]
fn test_escalating_conversation_scenario() {
    let scorer = RiskScorer::new();
    let mut ctx = ConversationContext::new("u1");
    ctx.turns = vec![
        user_turn("I've been feeling pretty sad lately", Some("sad")),
        user_turn("honestly it all feels pointless", Some("hopeless")),
    ];

    let a = scorer.assess("everything is overwhelming", Some(&ctx));
    assert!(a
        .contextual_factors
        .contains(&factors::ESCALATING_PATTERN.to_string()));
}

#[test]
fn test_minimizing_reply_rejected_by_validator() {
    let check = validate_response("you should just get over it");
    assert!(!check.is_safe);
    assert!(check
        .concerns
        .contains(&concerns::CRISIS_MINIMIZATION.to_string()));
    assert_eq!(check.concerns.len(), check.remediations.len());
}
