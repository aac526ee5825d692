//! Option module contract: declarations plus a post-parse validation hook

use crate::domain::descriptor::OptionDescriptor;
use crate::domain::error::ValidationError;
use crate::domain::parsed::ParsedOptions;

/// Read-only view handed to every validation hook.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    /// Name of the application driving the chain
    pub app_name: &'a str,
    /// Usage text stored at configuration time, if any
    pub usage: Option<&'a str>,
    /// Options produced by the parsing adapter
    pub parsed: &'a ParsedOptions,
    /// Positional arguments left over after parsing
    pub remaining: &'a [String],
}

/// A unit contributing option declarations and a validation hook.
///
/// Modules compose: [`compose`](crate::application::compose) merges several
/// modules' descriptor sequences into one specification, in caller order.
///
/// A module extends another by holding the parent and returning
/// `parent.opt_spec()` with its own descriptors appended: parent first,
/// insertion order preserved, no deduplication at this stage. See
/// [`extend_spec`] for the canonical shape.
pub trait OptionModule: Send + Sync {
    /// Stable module name, used for provenance and error attribution.
    fn name(&self) -> &str;

    /// Ordered descriptor sequence this module contributes.
    fn opt_spec(&self) -> Vec<OptionDescriptor>;

    /// Post-parse check, run in composition order.
    ///
    /// Hooks may emit diagnostics but must not mutate the parsed options.
    /// The default is a no-op success.
    fn validate_opts(&self, _ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Append `own` descriptors to a parent's sequence.
pub fn extend_spec(parent: &dyn OptionModule, own: &[OptionDescriptor]) -> Vec<OptionDescriptor> {
    let mut spec = parent.opt_spec();
    spec.extend(own.iter().cloned());
    spec
}
