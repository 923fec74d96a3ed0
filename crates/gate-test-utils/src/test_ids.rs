//! Fixed identifiers and credentials for reproducible tests.

/// Meeting that [`crate::seeded_registry`] always contains.
pub const TEST_MEETING_ID: &str = "room-42";

/// Moderator credential stored for [`TEST_MEETING_ID`].
pub const TEST_MODERATOR_CREDENTIAL: &str = "xyz";

/// Identifier with no meeting behind it.
pub const UNKNOWN_MEETING_ID: &str = "room-99";
