//! Meeting registry contract.
//!
//! The registry is the external collaborator that creates, mutates, and
//! answers lookups for meetings. The gate consumes it through the single
//! read-only `lookup` operation; trait-object injection keeps the backend
//! substitutable in tests.

mod in_memory;

pub use in_memory::InMemoryMeetingRegistry;

use crate::errors::GateError;
use crate::models::{Meeting, MeetingId};

/// Read-side contract the credential gate requires from a meeting store.
#[async_trait::async_trait]
pub trait MeetingRegistry: Send + Sync {
    /// Resolve a meeting by its identifier.
    ///
    /// Returns `Ok(None)` when no meeting exists under `meeting_id`. An
    /// `Err` means the backend could not answer at all; callers on the
    /// access-decision path must treat that the same as `Ok(None)`.
    async fn lookup(&self, meeting_id: &MeetingId) -> Result<Option<Meeting>, GateError>;
}

/// Mock registry implementations for testing.
pub mod mock {
    use super::{GateError, Meeting, MeetingId, MeetingRegistry};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Registry whose lookups always fail, for exercising the
    /// backend-unavailable path.
    pub struct FlakyRegistry {
        /// Number of lookups attempted.
        call_count: AtomicUsize,
    }

    impl FlakyRegistry {
        /// Create a registry that fails every lookup.
        #[must_use]
        pub fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        /// Get the number of lookups attempted against this registry.
        #[must_use]
        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    impl Default for FlakyRegistry {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait::async_trait]
    impl MeetingRegistry for FlakyRegistry {
        async fn lookup(&self, _meeting_id: &MeetingId) -> Result<Option<Meeting>, GateError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Err(GateError::Registry(
                "registry backend unavailable".to_string(),
            ))
        }
    }
}
