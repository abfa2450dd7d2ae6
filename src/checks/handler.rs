//! Handler presence check.
//!
//! Verifies at bootstrap that the handler the function declared to the
//! platform resolves to a source file actually present in the deployment
//! bundle. Runs once, synchronously, with a bounded number of filesystem
//! probes.

use std::path::Path;

use tracing::warn;

use crate::api::RegistrationResponse;
use crate::checks::StartupCheck;
use crate::config::Configuration;
use crate::error::{CheckError, Result};
use crate::platform;
use crate::resolver;
use crate::runtime::RuntimeConfig;

/// Directory under which the function's code bundle is unpacked.
pub const DEFAULT_TASK_ROOT: &str = "/var/task";

/// Per-check view of the handler under validation.
struct HandlerContext<'a> {
    /// Handler identifier the platform sees, from the registration response.
    handler_name: &'a str,
    conf: &'a Configuration,
}

/// Validates that the declared handler maps to a file in the bundle.
#[derive(Debug, Clone)]
pub struct HandlerCheck {
    task_root: String,
}

impl HandlerCheck {
    /// Check against the production deployment root (`/var/task`).
    pub fn new() -> Self {
        Self::with_task_root(DEFAULT_TASK_ROOT)
    }

    /// Check against an explicit deployment root. The root must not carry a
    /// trailing separator.
    pub fn with_task_root(task_root: impl Into<String>) -> Self {
        Self {
            task_root: task_root.into(),
        }
    }

    /// The deployment root this check probes under.
    pub fn task_root(&self) -> &str {
        &self.task_root
    }

    /// Bypass policy plus filesystem probe; true means the handler passes.
    fn present(&self, runtime: &RuntimeConfig, ctx: &HandlerContext<'_>) -> bool {
        if !ctx.conf.testing_override {
            // Off-platform and ESM handlers have no probeable wrapped file.
            if platform::esm_enabled() {
                return true;
            }
            if platform::outside_lambda() {
                return true;
            }
        }

        let handler = self.true_handler(runtime, ctx);
        resolver::candidates(runtime, &self.task_root, &handler)
            .iter()
            .any(|candidate| Path::new(candidate).exists())
    }

    /// Resolve which handler identifier actually names the user's code.
    ///
    /// When the layer is attached correctly the platform invokes the wrapper,
    /// and the user's real handler lives in `NEW_RELIC_LAMBDA_HANDLER`. Any
    /// other declared handler is probed as-is, with an advisory warning.
    fn true_handler(&self, runtime: &RuntimeConfig, ctx: &HandlerContext<'_>) -> String {
        if !ctx.conf.testing_override && (platform::esm_enabled() || platform::in_container()) {
            return ctx.handler_name.to_string();
        }

        if ctx.handler_name != runtime.wrapper_name {
            warn!(
                "handler is not set to the layer wrapper {}",
                runtime.wrapper_name
            );
            return ctx.handler_name.to_string();
        }

        ctx.conf.nr_handler.clone()
    }
}

impl Default for HandlerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupCheck for HandlerCheck {
    fn name(&self) -> &'static str {
        "handler"
    }

    fn run(
        &self,
        conf: &Configuration,
        reg: &RegistrationResponse,
        runtime: Option<&RuntimeConfig>,
    ) -> Result<()> {
        let Some(runtime) = runtime else {
            // Unknown runtime: nothing to validate against.
            return Ok(());
        };

        let ctx = HandlerContext {
            handler_name: &reg.handler,
            conf,
        };

        if !self.present(runtime, &ctx) {
            return Err(CheckError::MissingHandlerFile {
                handler: ctx.handler_name.to_string(),
                nr_handler: conf.nr_handler.clone(),
            });
        }

        Ok(())
    }
}
