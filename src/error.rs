//! Error types for startup check operations.
//!
//! This module defines [`CheckError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CheckError` for check verdicts that need distinct handling
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for operators

use thiserror::Error;

/// Core error type for startup check operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The declared handler does not resolve to a file in the deployment
    /// bundle. The message format is load-bearing: operators and support
    /// tooling match on it verbatim.
    #[error("missing handler file {handler} (NEW_RELIC_LAMBDA_HANDLER={nr_handler})")]
    MissingHandlerFile { handler: String, nr_handler: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for startup check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_handler_file_message_is_exact() {
        let err = CheckError::MissingHandlerFile {
            handler: "path/to/app.handler".into(),
            nr_handler: "Undefined".into(),
        };
        assert_eq!(
            err.to_string(),
            "missing handler file path/to/app.handler (NEW_RELIC_LAMBDA_HANDLER=Undefined)"
        );
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CheckError = io_err.into();
        assert!(matches!(err, CheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CheckError::MissingHandlerFile {
                handler: "a.b".into(),
                nr_handler: "Undefined".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
