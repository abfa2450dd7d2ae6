//! Execution environment probes.
//!
//! The startup checks only make sense on the managed Lambda platform; these
//! helpers answer "where are we running" questions from the environment the
//! platform sets up. Read failures are treated as "not set".

use std::env;
use std::path::Path;

/// Container sentinel the Docker runtime drops at the filesystem root.
const DOCKER_SENTINEL: &str = "/.dockerenv";

/// True when the user opted the function into native ES modules via
/// `NEW_RELIC_USE_ESM`. ESM handlers are loaded by the platform itself and
/// do not map to a wrapped file the check could probe.
pub fn esm_enabled() -> bool {
    env::var("NEW_RELIC_USE_ESM")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// True when the process is not running on the managed Lambda platform.
///
/// Lambda sets `AWS_EXECUTION_ENV` to a value prefixed `AWS_Lambda_`;
/// anything else (including an unset variable) means a container image,
/// local emulator, or test environment.
pub fn outside_lambda() -> bool {
    let aws_runtime = env::var("AWS_EXECUTION_ENV")
        .unwrap_or_default()
        .to_lowercase();
    !aws_runtime.starts_with("aws_lambda")
}

/// True when the Docker container sentinel file exists.
pub fn in_container() -> bool {
    Path::new(DOCKER_SENTINEL).exists()
}


#[cfg(test)]
mod tests {
    use super::testenv;
    use super::*;

    #[test]
    fn esm_enabled_matches_case_insensitively() {
        let _guard = testenv::lock();

        env::set_var("NEW_RELIC_USE_ESM", "TRUE");
        assert!(esm_enabled());

        env::set_var("NEW_RELIC_USE_ESM", "false");
        assert!(!esm_enabled());

        env::remove_var("NEW_RELIC_USE_ESM");
        assert!(!esm_enabled());
    }

    #[test]
    fn outside_lambda_checks_execution_env_prefix() {
        let _guard = testenv::lock();

        env::set_var("AWS_EXECUTION_ENV", "AWS_Lambda_nodejs18.x");
        assert!(!outside_lambda());

        env::set_var("AWS_EXECUTION_ENV", "Docker");
        assert!(outside_lambda());

        env::set_var("AWS_EXECUTION_ENV", "");
        assert!(outside_lambda());

        env::remove_var("AWS_EXECUTION_ENV");
        assert!(outside_lambda());
    }
}
