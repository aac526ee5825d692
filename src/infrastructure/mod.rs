//! Infrastructure layer: parsing engine adapters

pub mod traits;

pub use traits::{ClapAdapter, ParsingAdapter};
