//! Moderator credential checks.
//!
//! [`ModeratorCredentialValidator`] answers one question: does the presented
//! credential match the moderator credential recorded for the meeting? The
//! answer is a plain boolean. Every abnormal condition (missing identifier,
//! unknown meeting, missing credential, registry failure) collapses into a
//! denial, so the access-control layer always receives a definite decision.
//!
//! # Security Properties
//!
//! - Fail-closed: absent or ambiguous input denies
//! - Exact-match only: no trimming, case-folding, or prefix matching
//! - Constant-time comparison via `ring::constant_time`
//! - Unknown-meeting and wrong-credential outcomes are indistinguishable to
//!   the caller, avoiding a meeting-enumeration side-channel
//! - Neither the candidate nor the stored credential ever reaches logs; only
//!   the meeting identifier and the boolean outcome are recorded

use crate::models::{CredentialCheckRequest, MeetingId};
use crate::observability::metrics::{record_credential_check, record_registry_lookup_failure};
use crate::registry::MeetingRegistry;
use ring::constant_time;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Stateless decision service over a point-in-time registry snapshot.
///
/// Holds no state of its own and is safe for concurrent use; each check
/// operates on its own inputs and a single registry read. The registry is
/// injected at construction so tests can substitute an in-memory or failing
/// backend.
pub struct ModeratorCredentialValidator {
    registry: Arc<dyn MeetingRegistry>,
}

impl ModeratorCredentialValidator {
    /// Create a validator backed by the given registry.
    #[must_use]
    pub fn new(registry: Arc<dyn MeetingRegistry>) -> Self {
        Self { registry }
    }

    /// Check a bound request value.
    pub async fn check(&self, request: &CredentialCheckRequest) -> bool {
        self.is_valid_moderator_credential(request.meeting_id.as_ref(), request.candidate.as_ref())
            .await
    }

    /// Decide whether `candidate` is the moderator credential of the meeting
    /// identified by `meeting_id`.
    ///
    /// Total over its inputs: never returns an error and never panics.
    /// Idempotent and side-effect-free apart from one registry read, so
    /// repeated calls against an unchanged registry return the same result.
    #[instrument(skip_all)]
    pub async fn is_valid_moderator_credential(
        &self,
        meeting_id: Option<&MeetingId>,
        candidate: Option<&SecretString>,
    ) -> bool {
        let granted = self.evaluate(meeting_id, candidate).await;

        match meeting_id {
            Some(meeting_id) => debug!(
                target: "gate.services.credential",
                meeting_id = %meeting_id,
                granted,
                "moderator credential check"
            ),
            None => debug!(
                target: "gate.services.credential",
                granted,
                "moderator credential check without meeting id"
            ),
        }
        record_credential_check(granted);

        granted
    }

    /// The decision algorithm, short-circuiting on the first failing
    /// condition. All failures yield `false`.
    async fn evaluate(
        &self,
        meeting_id: Option<&MeetingId>,
        candidate: Option<&SecretString>,
    ) -> bool {
        // A missing or empty identifier cannot address a meeting.
        let Some(meeting_id) = meeting_id else {
            return false;
        };
        if meeting_id.is_empty() {
            return false;
        }

        // A registry failure denies the same way an unknown meeting does;
        // the diagnostic goes to the operational log, not the caller.
        let meeting = match self.registry.lookup(meeting_id).await {
            Ok(Some(meeting)) => meeting,
            Ok(None) => return false,
            Err(e) => {
                warn!(
                    target: "gate.services.credential",
                    meeting_id = %meeting_id,
                    error = %e,
                    "registry lookup failed, denying"
                );
                record_registry_lookup_failure();
                return false;
            }
        };

        let Some(candidate) = candidate else {
            return false;
        };

        credentials_match(candidate, &meeting.moderator_credential)
    }
}

/// Exact byte-for-byte credential equality, evaluated in constant time.
fn credentials_match(candidate: &SecretString, actual: &SecretString) -> bool {
    constant_time::verify_slices_are_equal(
        candidate.expose_secret().as_bytes(),
        actual.expose_secret().as_bytes(),
    )
    .is_ok()
}
