//! CLI layer: demo modules and error mapping

pub mod db;
pub mod error;

pub use db::{DbExtraOptions, DbOptions};
pub use error::{CliError, CliResult};
