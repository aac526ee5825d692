//! CLI-level errors and exit-code mapping

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{ParseErrorKind, SpecError};
use crate::exitcode;

/// Top-level error type, displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Spec(#[from] SpecError),

    #[error("{0}")]
    App(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Spec(_) => exitcode::SOFTWARE,
            CliError::App(e) => match e {
                ApplicationError::Spec(_) => exitcode::SOFTWARE,
                ApplicationError::Parse(p) if p.kind == ParseErrorKind::HelpRequested => {
                    exitcode::OK
                }
                ApplicationError::Parse(_) => exitcode::USAGE,
                ApplicationError::Validation(_) => exitcode::DATAERR,
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::State { .. } | ApplicationError::Internal(_) => {
                    exitcode::SOFTWARE
                }
            },
        }
    }

    /// Rendered help text, when the underlying failure was `--help`.
    /// Help goes to stdout with a zero exit, not to stderr.
    pub fn help_text(&self) -> Option<&str> {
        match self {
            CliError::App(ApplicationError::Parse(p)) if p.is_help() => Some(&p.message),
            _ => None,
        }
    }
}
