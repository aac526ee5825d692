//! Domain layer: descriptors, modules, specifications, parsed values
//!
//! Independent of the parsing engine and of any I/O.

pub mod descriptor;
pub mod error;
pub mod module;
pub mod parsed;
pub mod spec;

pub use descriptor::{normalize_key, Arity, OptionDescriptor};
pub use error::{ParseError, ParseErrorKind, SpecError, SpecResult, ValidationError};
pub use module::{extend_spec, OptionModule, ValidationContext};
pub use parsed::{OptionValue, ParsedOptions};
pub use spec::{OptionSpecification, SpecEntry};
