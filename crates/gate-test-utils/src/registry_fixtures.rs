//! Pre-seeded registries for integration tests.

use std::sync::Arc;

use gate_service::models::Meeting;
use gate_service::registry::InMemoryMeetingRegistry;

use crate::meeting_builders::MeetingBuilder;

/// Registry containing the fixed test meeting.
pub async fn seeded_registry() -> Arc<InMemoryMeetingRegistry> {
    registry_with(vec![MeetingBuilder::new().build()]).await
}

/// Registry containing exactly the given meetings.
pub async fn registry_with(meetings: Vec<Meeting>) -> Arc<InMemoryMeetingRegistry> {
    let registry = Arc::new(InMemoryMeetingRegistry::new());
    for meeting in meetings {
        registry.insert(meeting).await;
    }
    registry
}
