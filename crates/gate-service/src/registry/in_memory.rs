//! In-memory meeting registry.
//!
//! Holds live meeting state in an `RwLock`-guarded map: many concurrent
//! lookups, exclusive mutation. The embedding system populates it through
//! `insert`/`remove`; the gate itself only ever calls `lookup`.

use super::MeetingRegistry;
use crate::errors::GateError;
use crate::models::{Meeting, MeetingId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Shared in-memory meeting store.
#[derive(Default)]
pub struct InMemoryMeetingRegistry {
    meetings: RwLock<HashMap<MeetingId, Meeting>>,
}

impl InMemoryMeetingRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meetings: RwLock::new(HashMap::new()),
        }
    }

    /// Record a meeting, replacing any previous entry under the same ID.
    pub async fn insert(&self, meeting: Meeting) {
        let mut meetings = self.meetings.write().await;
        meetings.insert(meeting.meeting_id.clone(), meeting);
    }

    /// Remove a meeting, returning it if it was present.
    pub async fn remove(&self, meeting_id: &MeetingId) -> Option<Meeting> {
        self.meetings.write().await.remove(meeting_id)
    }

    /// Number of live meetings.
    pub async fn len(&self) -> usize {
        self.meetings.read().await.len()
    }

    /// True when no meetings are registered.
    pub async fn is_empty(&self) -> bool {
        self.meetings.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MeetingRegistry for InMemoryMeetingRegistry {
    async fn lookup(&self, meeting_id: &MeetingId) -> Result<Option<Meeting>, GateError> {
        Ok(self.meetings.read().await.get(meeting_id).cloned())
    }
}
