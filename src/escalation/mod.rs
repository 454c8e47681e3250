// Escalation module
// Crisis event records, the store/notifier seams, best-effort side effects

mod service;
mod store;
mod types;

pub use service::{classify_crisis_type, EscalationService, HumanNotifier};
pub use store::{EventStore, InMemoryEventStore, StoreError, StoredCrisisEvent};
pub use types::{CrisisEvent, CrisisType, EscalationNotice};
