//! Process configuration read from the Lambda environment.
//!
//! The extension is configured entirely through environment variables; there
//! are no config files. Only the variables the startup checks consume are
//! modeled here.

use std::env;

/// Value `NEW_RELIC_LAMBDA_HANDLER` takes when the user never set it.
///
/// The sentinel is surfaced verbatim in the missing-handler error message, so
/// it must stay the literal `Undefined`.
pub const EMPTY_NR_WRAPPER: &str = "Undefined";

/// Environment variable naming the user's true handler when the layer
/// wrapper is in use.
pub const NR_HANDLER_ENV: &str = "NEW_RELIC_LAMBDA_HANDLER";

/// Process configuration relevant to the startup checks.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The user's true handler, or [`EMPTY_NR_WRAPPER`] when unset.
    pub nr_handler: String,

    /// Disables the environment-based bypasses so the real filesystem probe
    /// runs. Set by tests and by the diagnostic binary's `--strict` flag;
    /// never read from the environment.
    pub testing_override: bool,
}

impl Configuration {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            nr_handler: env::var(NR_HANDLER_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| EMPTY_NR_WRAPPER.to_string()),
            testing_override: false,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            nr_handler: EMPTY_NR_WRAPPER.to_string(),
            testing_override: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_sentinel_handler() {
        let conf = Configuration::default();
        assert_eq!(conf.nr_handler, "Undefined");
        assert!(!conf.testing_override);
    }

    #[test]
    fn from_env_falls_back_to_sentinel() {
        // NEW_RELIC_LAMBDA_HANDLER is not set in the test environment.
        let conf = Configuration::from_env();
        assert_eq!(conf.nr_handler, EMPTY_NR_WRAPPER);
    }
}
