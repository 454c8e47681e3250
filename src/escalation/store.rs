// Event store seam
//
// The record store is an external collaborator; this trait is its
// interface. Ids and created timestamps are assigned by the store on
// create. An in-memory implementation ships for tests and embedders.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::types::CrisisEvent;

/// Store failure surfaced at the collaborator seam
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event store unavailable: {0}")]
    Unavailable(String),
    #[error("event {0} not found")]
    NotFound(Uuid),
}

/// An event with its store-assigned identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCrisisEvent {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: CrisisEvent,
}

/// External record store: create/read/update by id. Deletion is not part
/// of the interface; crisis records are never deleted by this engine.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create(&self, event: CrisisEvent) -> Result<StoredCrisisEvent, StoreError>;
    async fn get(&self, id: Uuid) -> Result<Option<StoredCrisisEvent>, StoreError>;
    /// Replace the event body; used by the external moderation workflow
    /// to set resolution fields.
    async fn update(&self, id: Uuid, event: CrisisEvent) -> Result<StoredCrisisEvent, StoreError>;
}

/// DashMap-backed store for tests and single-process embedders
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: DashMap<Uuid, StoredCrisisEvent>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All stored events, oldest first. Test and embedder convenience;
    /// the `EventStore` interface itself is create/read/update by id.
    pub fn snapshot(&self) -> Vec<StoredCrisisEvent> {
        let mut events: Vec<_> = self.events.iter().map(|e| e.value().clone()).collect();
        events.sort_by_key(|e| e.created_at);
        events
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, event: CrisisEvent) -> Result<StoredCrisisEvent, StoreError> {
        let stored = StoredCrisisEvent {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            event,
        };
        self.events.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredCrisisEvent>, StoreError> {
        Ok(self.events.get(&id).map(|e| e.value().clone()))
    }

    async fn update(&self, id: Uuid, event: CrisisEvent) -> Result<StoredCrisisEvent, StoreError> {
        let mut entry = self.events.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.event = event;
        Ok(entry.value().clone())
    }
}
