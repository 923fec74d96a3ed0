//! Data models for the moderator credential gate.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a meeting.
///
/// An opaque lookup key assigned by whatever system created the meeting.
/// It is never parsed, only compared and hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(String);

impl MeetingId {
    /// Wrap an externally assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier carries no key material at all.
    ///
    /// An empty identifier can never address a meeting; the gate denies it
    /// without consulting the registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MeetingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A live meeting as recorded by the registry.
///
/// The registry owns and mutates meetings; the gate only ever reads
/// `moderator_credential`. The credential is a [`SecretString`], so `Debug`
/// output is redacted and the value is zeroized on drop.
#[derive(Debug, Clone)]
pub struct Meeting {
    pub meeting_id: MeetingId,
    pub moderator_credential: SecretString,
    pub created_at: DateTime<Utc>,
}

/// One credential check, as bound from an inbound payload.
///
/// Either side may be absent; absence denies. The value lives for a single
/// check and is discarded once the boolean outcome is produced.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialCheckRequest {
    pub meeting_id: Option<MeetingId>,
    pub candidate: Option<SecretString>,
}
