//! Metrics definitions for the gate service
//!
//! All metrics follow Prometheus naming conventions:
//! - `gate_` prefix for the credential gate
//! - `_total` suffix for counters
//!
//! # Cardinality
//!
//! Labels are bounded to prevent cardinality explosion:
//! - `outcome`: 2 values (granted, denied)
//!
//! Denial reasons are deliberately NOT split into labels: the decision
//! contract does not distinguish "unknown meeting" from "wrong credential",
//! and the metrics surface must not reintroduce that distinction. Registry
//! failures get their own counter because they are an operational signal,
//! not a caller-visible outcome.

use metrics::counter;

/// Record one credential check decision.
///
/// Metric: `gate_credential_checks_total`
/// Labels: `outcome` (granted | denied)
pub fn record_credential_check(granted: bool) {
    let outcome = if granted { "granted" } else { "denied" };
    counter!("gate_credential_checks_total", "outcome" => outcome).increment(1);
}

/// Record a registry lookup failure observed on the decision path.
///
/// Metric: `gate_registry_lookup_failures_total`
pub fn record_registry_lookup_failure() {
    counter!("gate_registry_lookup_failures_total").increment(1);
}
