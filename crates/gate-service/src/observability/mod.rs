//! Observability for the gate service.
//!
//! # Privacy by Default
//!
//! The gate sits on a security-decision path, so log fields are allow-listed:
//! - **SAFE**: meeting identifiers, boolean outcomes, bounded label values
//! - **NEVER**: candidate and stored credentials. These only exist as
//!   `SecretString`, so even `{:?}` formatting is redacted.

pub mod metrics;

use crate::config::Config;
use crate::errors::GateError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for a process embedding the gate.
///
/// Library code only emits events; the hosting process decides the
/// subscriber. Honors `log_filter` and `log_json` from [`Config`].
///
/// # Errors
///
/// Returns [`GateError::Observability`] when the filter directive is invalid
/// or a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<(), GateError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)
        .map_err(|e| GateError::Observability(format!("invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| GateError::Observability(format!("subscriber init failed: {e}")))
}
