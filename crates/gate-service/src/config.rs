use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default env-filter directive when `GATE_LOG_FILTER` is unset.
const DEFAULT_LOG_FILTER: &str = "gate_service=info";

/// Service configuration.
///
/// The gate exposes no tunables for the decision itself (the algorithm
/// admits no relaxation); configuration covers the observability surface
/// only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing env-filter directive.
    pub log_filter: String,
    /// Emit JSON-formatted logs.
    pub log_json: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: String, value: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let log_filter = vars
            .get("GATE_LOG_FILTER")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_json = match vars.get("GATE_LOG_JSON").map(String::as_str) {
            None => false,
            Some("true" | "1") => true,
            Some("false" | "0") => false,
            Some(other) => {
                return Err(ConfigError::InvalidBool {
                    var: "GATE_LOG_JSON".to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            log_filter,
            log_json,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}
