//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised while declaring or composing option specifications.
///
/// These are configuration-time programmer errors: they surface before any
/// argument parsing happens and are never caused by user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("duplicate option {name:?}: declared by module {first} and module {second}")]
    DuplicateOption {
        name: String,
        first: String,
        second: String,
    },

    #[error("option descriptor must declare at least one name")]
    EmptyNames,

    #[error("invalid option name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid option declaration {decl:?}: {reason}")]
    InvalidDeclaration { decl: String, reason: String },

    #[error("unknown option key {key:?}")]
    UnknownOption { key: String },
}

/// Result type for specification operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed input, unknown flag, or type mismatch
    InvalidInput,
    /// The user asked for help; `message` carries the rendered text
    HelpRequested,
}

/// Failure reported by a parsing adapter.
///
/// Runtime and user-recoverable: the caller reports the message and the
/// user re-invokes with corrected arguments. Never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ParseErrorKind::InvalidInput,
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ParseErrorKind::HelpRequested,
        }
    }

    pub fn is_help(&self) -> bool {
        self.kind == ParseErrorKind::HelpRequested
    }
}

/// Failure raised by a module's post-parse validation hook.
///
/// Carries the raising module; the validation chain halts at the first
/// failure, later modules are not invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed in module {module}: {message}")]
pub struct ValidationError {
    pub module: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            message: message.into(),
        }
    }
}
