//! Builders for meeting fixtures.

use chrono::Utc;
use gate_service::models::{Meeting, MeetingId};
use secrecy::SecretString;

use crate::test_ids::{TEST_MEETING_ID, TEST_MODERATOR_CREDENTIAL};

/// Fluent builder for [`Meeting`] fixtures.
///
/// Defaults to the fixed test meeting so most tests only override the piece
/// they care about.
pub struct MeetingBuilder {
    meeting_id: String,
    moderator_credential: String,
}

impl MeetingBuilder {
    pub fn new() -> Self {
        Self {
            meeting_id: TEST_MEETING_ID.to_string(),
            moderator_credential: TEST_MODERATOR_CREDENTIAL.to_string(),
        }
    }

    pub fn with_id(mut self, meeting_id: &str) -> Self {
        self.meeting_id = meeting_id.to_string();
        self
    }

    pub fn with_moderator_credential(mut self, credential: &str) -> Self {
        self.moderator_credential = credential.to_string();
        self
    }

    pub fn build(self) -> Meeting {
        Meeting {
            meeting_id: MeetingId::from(self.meeting_id),
            moderator_credential: SecretString::from(self.moderator_credential),
            created_at: Utc::now(),
        }
    }
}

impl Default for MeetingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
