//! Startup validation for Lambda function handlers.
//!
//! Verifies, once during extension bootstrap, that the handler identifier a
//! function declared to the platform resolves to a source file present in
//! the deployment bundle. On failure it reports a single actionable error
//! naming both the missing file and the configured wrapper override.
//!
//! # Modules
//!
//! - [`api`] - Types received from the Lambda Extensions API
//! - [`checks`] - The startup check trait, runner, and handler check
//! - [`config`] - Process configuration read from the environment
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Execution environment probes
//! - [`resolver`] - Pure handler-identifier-to-path transformations
//! - [`runtime`] - Static runtime registry and runtime detection
//!
//! # Example
//!
//! ```
//! use lambda_handler_check::resolver::{strip_method, format_candidate};
//!
//! // Map a dotted handler identifier to its candidate file path.
//! let module = strip_method("path/to/app.handler");
//! assert_eq!(format_candidate("/var/task", &module, "py"), "/var/task/path/to/app.py");
//! ```

pub mod api;
pub mod checks;
pub mod config;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod runtime;

pub use error::{CheckError, Result};
