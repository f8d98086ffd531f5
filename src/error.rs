//! Error types for the interview-qa CLI.
//!
//! Uses thiserror for derive macros. Every error is surfaced to the caller of
//! the generation pipeline; nothing is logged and swallowed.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for interview-qa operations.
#[derive(Error, Debug)]
pub enum QaError {
    /// The role (or another caller-supplied value) was rejected before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Local problem the user can fix: config file, output path, template syntax.
    #[error("{0}")]
    UserError(String),

    /// The completion service is unreachable, misconfigured, or rejected the credential.
    #[error("completion service error: {0}")]
    ConfigurationError(String),

    /// The model reply does not contain a valid structured segment.
    #[error("failed to parse model reply: {message}")]
    ParseError {
        /// What was wrong with the reply.
        message: String,
        /// The raw reply, kept for diagnostics.
        raw: String,
    },
}

impl QaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QaError::InvalidInput(_) => exit_codes::USER_ERROR,
            QaError::UserError(_) => exit_codes::USER_ERROR,
            QaError::ParseError { .. } => exit_codes::PARSE_FAILURE,
            QaError::ConfigurationError(_) => exit_codes::SERVICE_FAILURE,
        }
    }

    pub(crate) fn parse(message: impl Into<String>, raw: &str) -> Self {
        QaError::ParseError {
            message: message.into(),
            raw: raw.to_string(),
        }
    }

    /// The raw model reply attached to a parse failure, if any.
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            QaError::ParseError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Result type alias for interview-qa operations.
pub type Result<T> = std::result::Result<T, QaError>;
