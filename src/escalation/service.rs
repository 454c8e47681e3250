// Escalation and logging
//
// Both side effects are best-effort: a failed write or notification is
// logged and dropped, never retried, and never blocks the response path.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::lexicon::{
    ABUSE_INDICATORS, SELF_HARM_INDICATORS, SUBSTANCE_INDICATORS, SUICIDE_INDICATORS,
};

use super::store::EventStore;
use super::types::{CrisisEvent, CrisisType, EscalationNotice};

/// Abstract human-notification capability. Transport is out of scope;
/// implementations push the structured payload wherever responders live.
#[async_trait]
pub trait HumanNotifier: Send + Sync {
    async fn notify(&self, notice: EscalationNotice) -> Result<()>;
}

/// Best-effort persistence and human escalation
pub struct EscalationService {
    store: Arc<dyn EventStore>,
    notifier: Option<Arc<dyn HumanNotifier>>,
    store_timeout: Duration,
}

impl EscalationService {
    pub fn new(
        store: Arc<dyn EventStore>,
        notifier: Option<Arc<dyn HumanNotifier>>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            store_timeout,
        }
    }

    /// Persist a crisis event. Failure (including timeout) is logged and
    /// swallowed; the user-facing response must not depend on durability.
    pub async fn record(&self, event: CrisisEvent) {
        let write = self.store.create(event);
        match tokio::time::timeout(self.store_timeout, write).await {
            Ok(Ok(stored)) => {
                tracing::info!(event_id = %stored.id, "Crisis event persisted");
            }
            Ok(Err(err)) => {
                tracing::warn!("Failed to persist crisis event: {err}");
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "Crisis event write timed out, dropping"
                );
            }
        }
    }

    /// Fire-and-forget human notification. Returns whether an attempt was
    /// made (a notifier is configured), not whether it succeeded.
    pub fn notify_human(&self, notice: EscalationNotice) -> bool {
        let Some(notifier) = self.notifier.clone() else {
            tracing::warn!("Escalation required but no human notifier configured");
            return false;
        };

        tokio::spawn(async move {
            if let Err(err) = notifier.notify(notice).await {
                tracing::warn!("Human notification failed: {err}");
            }
        });
        true
    }
}

/// Classify the raw message into the closed crisis-type set by phrase
/// sniffing. Precedence: suicide, self-harm, abuse, substance; anything
/// else is an emotional crisis.
pub fn classify_crisis_type(raw_message: &str) -> CrisisType {
    let lowered = raw_message.to_lowercase();
    let matches = |list: &[&str]| list.iter().any(|p| lowered.contains(p));

    if matches(SUICIDE_INDICATORS) {
        CrisisType::Suicide
    } else if matches(SELF_HARM_INDICATORS) {
        CrisisType::SelfHarm
    } else if matches(ABUSE_INDICATORS) {
        CrisisType::Abuse
    } else if matches(SUBSTANCE_INDICATORS) {
        CrisisType::Substance
    } else {
        CrisisType::EmotionalCrisis
    }
}
