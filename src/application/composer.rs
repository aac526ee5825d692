//! Composer: merge module declarations into one specification
//!
//! Runs at configuration time. Duplicate declarations are a programmer
//! error and fail composition before any parsing happens.

use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::domain::descriptor::normalize_key;
use crate::domain::{OptionModule, OptionSpecification, SpecEntry, SpecError, SpecResult};

/// Merge descriptor sequences from `modules` in the given order.
///
/// A descriptor identical to one already merged is the inherited copy from
/// an extension chain: it is unified and keeps its earlier attribution, so
/// each descriptor ends up attributed to the most specific module that
/// actually declared it. Non-identical descriptors sharing any name (after
/// normalization) fail with [`SpecError::DuplicateOption`].
///
/// Deterministic and order-preserving: the same module list always yields
/// the same specification content and the same validation-chain order.
pub fn compose(modules: &[Arc<dyn OptionModule>]) -> SpecResult<OptionSpecification> {
    let mut entries: Vec<SpecEntry> = Vec::new();

    for module in modules {
        let mut contributed = 0usize;
        for descriptor in module.opt_spec() {
            if entries.iter().any(|e| e.descriptor() == &descriptor) {
                // inherited copy, already merged
                continue;
            }
            entries.push(SpecEntry::new(descriptor, module.name().to_string()));
            contributed += 1;
        }
        debug!(
            "compose: module {} contributed {} descriptors",
            module.name(),
            contributed
        );
    }

    check_duplicates(&entries)?;

    Ok(OptionSpecification::new(entries, modules.to_vec()))
}

/// Pairwise scan over the merged list: two entries sharing any declared
/// name, or whose names collide after key normalization, are a duplicate
/// declaration.
fn check_duplicates(entries: &[SpecEntry]) -> SpecResult<()> {
    for (a, b) in entries.iter().tuple_combinations() {
        let clash = a.descriptor().names().iter().find(|name_a| {
            b.descriptor()
                .names()
                .iter()
                .any(|name_b| normalize_key(name_a) == normalize_key(name_b))
        });
        if let Some(name) = clash {
            return Err(SpecError::DuplicateOption {
                name: name.clone(),
                first: a.module().to_string(),
                second: b.module().to_string(),
            });
        }
    }
    Ok(())
}
