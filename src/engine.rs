// Crisis engine
//
// Orchestrates scoring, tiered response generation, and the best-effort
// side effects. The user-facing path is fail-open: a storage or
// notification failure never degrades the returned response, and a
// failure inside generation itself is replaced by a fixed fallback.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;

use crate::assessment::{ConversationContext, RiskAssessment, RiskScorer};
use crate::config::EngineConfig;
use crate::escalation::{
    classify_crisis_type, CrisisEvent, EscalationNotice, EscalationService, EventStore,
    HumanNotifier,
};
use crate::lexicon::Lexicon;
use crate::response::{immediate_resources, CrisisResponse, ResponseGenerator, ResponseMetadata};

/// Longest context summary persisted with an event
const CONTEXT_SUMMARY_CHARS: usize = 160;

/// What the engine decided for one inbound message
#[derive(Debug)]
pub struct EngineOutcome {
    pub assessment: RiskAssessment,
    /// Present when the risk level reached the intervention threshold
    pub response: Option<CrisisResponse>,
}

/// The risk-assessment and tiered-response engine
pub struct CrisisEngine {
    scorer: RiskScorer,
    generator: Mutex<ResponseGenerator>,
    escalation: EscalationService,
    config: EngineConfig,
}

impl CrisisEngine {
    /// Engine with default configuration and the embedded lexicon
    pub fn new(store: Arc<dyn EventStore>, notifier: Option<Arc<dyn HumanNotifier>>) -> Self {
        Self::assemble(EngineConfig::default(), Lexicon::default(), store, notifier)
    }

    /// Engine with explicit configuration; loads the lexicon override
    /// when one is configured.
    pub fn with_config(
        config: EngineConfig,
        store: Arc<dyn EventStore>,
        notifier: Option<Arc<dyn HumanNotifier>>,
    ) -> Result<Self> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::load_from_file(path)?,
            None => Lexicon::default(),
        };
        Ok(Self::assemble(config, lexicon, store, notifier))
    }

    /// Replace the response generator, e.g. with a seeded one in tests
    pub fn with_generator(mut self, generator: ResponseGenerator) -> Self {
        self.generator = Mutex::new(generator);
        self
    }

    fn assemble(
        config: EngineConfig,
        lexicon: Lexicon,
        store: Arc<dyn EventStore>,
        notifier: Option<Arc<dyn HumanNotifier>>,
    ) -> Self {
        let escalation = EscalationService::new(
            store,
            notifier,
            Duration::from_millis(config.store_timeout_ms),
        );
        Self {
            scorer: RiskScorer::with_lexicon(lexicon),
            generator: Mutex::new(ResponseGenerator::new()),
            escalation,
            config,
        }
    }

    /// Assess one inbound message and, when it qualifies, produce the
    /// crisis response and fire the side effects.
    pub async fn handle_message(
        &self,
        user_id: &str,
        message: &str,
        context: Option<&ConversationContext>,
    ) -> EngineOutcome {
        let started = Instant::now();
        let assessment = self.scorer.assess(message, context);

        let qualifying = assessment.risk_level >= self.config.intervention_threshold;
        if !qualifying && !self.config.log_below_threshold {
            return EngineOutcome {
                assessment,
                response: None,
            };
        }

        let response = if qualifying {
            let display_name = context.and_then(|c| c.display_name.as_deref());
            let mut response = self.generate_guarded(assessment.risk_level, display_name);

            let escalation_triggered = if assessment.escalation_required {
                self.escalation.notify_human(EscalationNotice {
                    user_id: user_id.to_string(),
                    severity: assessment.risk_level,
                    reason: escalation_reason(&assessment),
                    timestamp: Utc::now(),
                    context_summary: summarize(message),
                })
            } else {
                false
            };

            response.metadata.escalation_triggered = escalation_triggered;
            response.metadata.response_time_ms = started.elapsed().as_millis() as u64;
            Some(response)
        } else {
            None
        };

        self.escalation
            .record(build_event(user_id, message, &assessment, response.as_ref()))
            .await;

        EngineOutcome {
            assessment,
            response,
        }
    }

    /// Run the scorer alone, without side effects.
    pub fn assess(&self, message: &str, context: Option<&ConversationContext>) -> RiskAssessment {
        self.scorer.assess(message, context)
    }

    /// Generate a response, substituting the fixed fallback if the
    /// generation path panics. A safety response never degrades to an
    /// error surface.
    fn generate_guarded(&self, risk_level: u8, display_name: Option<&str>) -> CrisisResponse {
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut generator = self
                .generator
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            generator.generate(risk_level, display_name)
        }));

        match result {
            Ok(response) => response,
            Err(_) => {
                tracing::error!("Response generation failed, serving fallback response");
                fallback_response()
            }
        }
    }
}

/// Hard-coded minimal crisis response: top-urgency resources only, human
/// escalation on. Used when generation itself fails.
pub fn fallback_response() -> CrisisResponse {
    let resources = immediate_resources();
    CrisisResponse {
        message: "I'm concerned about your safety right now. Please reach out for immediate \
            support: call or text 988 to reach the Suicide & Crisis Lifeline (24/7), or text \
            HOME to 741741 to reach the Crisis Text Line. If you are in immediate danger, \
            call 911."
            .to_string(),
        metadata: ResponseMetadata {
            response_time_ms: 0,
            escalation_triggered: false,
            resource_count: resources.len(),
        },
        resources,
        follow_up_required: true,
        human_escalation: true,
        safety_plan: None,
    }
}

fn build_event(
    user_id: &str,
    message: &str,
    assessment: &RiskAssessment,
    response: Option<&CrisisResponse>,
) -> CrisisEvent {
    let mut event = CrisisEvent::new(
        user_id,
        assessment.risk_level,
        classify_crisis_type(message),
    );
    event.trigger_keywords = assessment.detected_keywords.clone();
    event.context_summary = summarize(message);
    if let Some(response) = response {
        event.response_given = response.message.clone();
        event.resources_provided = response.resources.iter().map(|r| r.name.clone()).collect();
        event.human_notified = response.metadata.escalation_triggered;
        event.follow_up_required = response.follow_up_required;
    }
    event
}

fn escalation_reason(assessment: &RiskAssessment) -> String {
    assessment
        .contextual_factors
        .first()
        .cloned()
        .unwrap_or_else(|| "high_risk_language".to_string())
}

fn summarize(message: &str) -> String {
    if message.chars().count() <= CONTEXT_SUMMARY_CHARS {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(CONTEXT_SUMMARY_CHARS).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escalation::InMemoryEventStore;
    use crate::response::UrgencyLevel;

    fn engine_with_store() -> (CrisisEngine, Arc<InMemoryEventStore>) {
        let store = Arc::new(InMemoryEventStore::new());
        let engine = CrisisEngine::new(store.clone(), None)
            .with_generator(ResponseGenerator::with_seed(7));
        (engine, store)
    }

    #[tokio::test]
    async fn test_low_risk_yields_no_response_or_event() {
        let (engine, store) = engine_with_store();
        let outcome = engine
            .handle_message("u1", "lovely weather this morning", None)
            .await;
        assert!(outcome.response.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_severe_risk_yields_response_and_event() {
        let (engine, store) = engine_with_store();
        let outcome = engine
            .handle_message("u1", "I want to kill myself tonight", None)
            .await;

        let response = outcome.response.expect("crisis response");
        assert!(response.human_escalation);
        assert!(response.safety_plan.is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_below_threshold_logging_when_configured() {
        let store = Arc::new(InMemoryEventStore::new());
        let config = EngineConfig {
            log_below_threshold: true,
            ..Default::default()
        };
        let engine =
            CrisisEngine::with_config(config, store.clone(), None).expect("engine");

        let outcome = engine
            .handle_message("u1", "I feel hopeless and trapped", None)
            .await;
        assert!(outcome.response.is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_escalation_triggered_without_notifier_is_false() {
        let (engine, _) = engine_with_store();
        let outcome = engine
            .handle_message("u1", "I want to kill myself", None)
            .await;
        let response = outcome.response.expect("crisis response");
        assert!(!response.metadata.escalation_triggered);
    }

    #[test]
    fn test_fallback_response_shape() {
        let response = fallback_response();
        assert!(response.human_escalation);
        assert!(response.safety_plan.is_none());
        assert!(!response.resources.is_empty());
        assert!(response
            .resources
            .iter()
            .all(|r| r.urgency == UrgencyLevel::Immediate));
        assert!(response.message.contains("988"));
    }

    #[test]
    fn test_summarize_truncates_long_messages() {
        let long = "a".repeat(500);
        let summary = summarize(&long);
        assert!(summary.chars().count() <= CONTEXT_SUMMARY_CHARS + 3);
        assert!(summary.ends_with("..."));
    }
}
