//! Startup checks.
//!
//! Checks run once during extension bootstrap, before any worker activity
//! starts. Each check inspects the registered function and the local
//! environment and either passes or surfaces a single actionable error.

mod handler;

pub use handler::{HandlerCheck, DEFAULT_TASK_ROOT};

use crate::api::RegistrationResponse;
use crate::config::Configuration;
use crate::error::Result;
use crate::runtime::RuntimeConfig;

/// A single bootstrap validation.
///
/// `runtime` is `None` when the active runtime could not be identified;
/// checks that depend on runtime conventions must pass in that case rather
/// than guess.
pub trait StartupCheck {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Run the check against the registered function.
    fn run(
        &self,
        conf: &Configuration,
        reg: &RegistrationResponse,
        runtime: Option<&RuntimeConfig>,
    ) -> Result<()>;
}

/// Run every check in order, returning the first failure.
///
/// Failures are also logged so the verdict reaches the extension log stream
/// even when the caller discards the error.
pub fn run_startup_checks(
    checks: &[&dyn StartupCheck],
    conf: &Configuration,
    reg: &RegistrationResponse,
    runtime: Option<&RuntimeConfig>,
) -> Result<()> {
    for check in checks {
        tracing::debug!("running startup check '{}'", check.name());
        if let Err(e) = check.run(conf, reg, runtime) {
            tracing::warn!("startup check '{}' failed: {}", check.name(), e);
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    struct AlwaysPasses;

    impl StartupCheck for AlwaysPasses {
        fn name(&self) -> &'static str {
            "always-passes"
        }

        fn run(
            &self,
            _conf: &Configuration,
            _reg: &RegistrationResponse,
            _runtime: Option<&RuntimeConfig>,
        ) -> Result<()> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl StartupCheck for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        fn run(
            &self,
            _conf: &Configuration,
            _reg: &RegistrationResponse,
            _runtime: Option<&RuntimeConfig>,
        ) -> Result<()> {
            Err(CheckError::MissingHandlerFile {
                handler: "a.b".into(),
                nr_handler: "Undefined".into(),
            })
        }
    }

    #[test]
    fn runner_passes_when_all_checks_pass() {
        let conf = Configuration::default();
        let reg = RegistrationResponse::default();

        let result = run_startup_checks(&[&AlwaysPasses, &AlwaysPasses], &conf, &reg, None);
        assert!(result.is_ok());
    }

    #[test]
    fn runner_returns_first_failure() {
        let conf = Configuration::default();
        let reg = RegistrationResponse::default();

        let result = run_startup_checks(&[&AlwaysPasses, &AlwaysFails], &conf, &reg, None);
        assert!(matches!(
            result,
            Err(CheckError::MissingHandlerFile { .. })
        ));
    }
}
