//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::application::app::AppState;
use crate::domain::{ParseError, SpecError, ValidationError};

/// Application errors wrap the domain error taxonomy and add lifecycle
/// concerns.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Spec(#[from] SpecError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid state for {operation}: expected {expected}, found {found}")]
    State {
        operation: &'static str,
        expected: &'static str,
        found: AppState,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
