//! Composable command-line option framework.
//!
//! Independent option modules each declare a set of options and an optional
//! post-parse validation hook. An [`Application`] composes several modules
//! into one merged [`OptionSpecification`], parses process arguments
//! through a [`ParsingAdapter`], then runs every module's validation hook
//! in composition order.
//!
//! Duplicate declarations across modules fail at configuration time with
//! [`SpecError::DuplicateOption`]; parse failures and validation failures
//! are runtime errors the caller reports before exiting.
//!
//! ```
//! use std::sync::Arc;
//!
//! use rsopt::application::Application;
//! use rsopt::cli::db::{DbExtraOptions, DbOptions};
//! use rsopt::config::ParserConfig;
//! use rsopt::domain::OptionModule;
//!
//! let modules: Vec<Arc<dyn OptionModule>> = vec![
//!     Arc::new(DbOptions::new().unwrap()),
//!     Arc::new(DbExtraOptions::new().unwrap()),
//! ];
//! let mut app = Application::new("example");
//! app.configure(modules, None, ParserConfig::default()).unwrap();
//!
//! let args: Vec<String> = vec!["--dbname".into(), "Emma".into()];
//! let (parsed, rest) = app.run(&args).unwrap();
//! assert_eq!(parsed.scalar("dbname").unwrap(), Some("Emma"));
//! assert!(rest.is_empty());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;

pub use application::{compose, AppState, Application, ApplicationError, ApplicationResult};
pub use config::ParserConfig;
pub use domain::{
    Arity, OptionDescriptor, OptionModule, OptionSpecification, OptionValue, ParseError,
    ParseErrorKind, ParsedOptions, SpecError, SpecResult, ValidationContext, ValidationError,
};
pub use infrastructure::{ClapAdapter, ParsingAdapter};
