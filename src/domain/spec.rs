//! Merged option specifications with per-descriptor provenance

use std::fmt;
use std::sync::Arc;

use crate::domain::descriptor::OptionDescriptor;
use crate::domain::module::OptionModule;

/// One merged entry: a descriptor plus the module that contributed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecEntry {
    descriptor: OptionDescriptor,
    module: String,
}

impl SpecEntry {
    pub(crate) fn new(descriptor: OptionDescriptor, module: String) -> Self {
        Self { descriptor, module }
    }

    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    /// Name of the module this descriptor is attributed to.
    pub fn module(&self) -> &str {
        &self.module
    }
}

/// Ordered descriptor sequence produced by composing one or more modules.
///
/// Carries the contributing modules in composition order; the validation
/// chain runs over exactly that list. Only the composer constructs one,
/// so every specification in circulation has passed duplicate detection.
#[derive(Clone)]
pub struct OptionSpecification {
    entries: Vec<SpecEntry>,
    modules: Vec<Arc<dyn OptionModule>>,
}

impl OptionSpecification {
    pub(crate) fn new(entries: Vec<SpecEntry>, modules: Vec<Arc<dyn OptionModule>>) -> Self {
        Self { entries, modules }
    }

    /// Merged entries in composition order.
    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    /// Contributing modules in composition order.
    pub fn modules(&self) -> &[Arc<dyn OptionModule>] {
        &self.modules
    }

    /// Look up a descriptor by normalized accessor key.
    pub fn descriptor(&self, key: &str) -> Option<&OptionDescriptor> {
        self.entries
            .iter()
            .map(SpecEntry::descriptor)
            .find(|d| d.key() == key)
    }

    /// Name of the module a key is attributed to.
    pub fn owner_of(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.descriptor().key() == key)
            .map(SpecEntry::module)
    }

    /// Normalized accessor keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.descriptor().key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for OptionSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpecification")
            .field("entries", &self.entries)
            .field(
                "modules",
                &self.modules.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PartialEq for OptionSpecification {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && self.modules.len() == other.modules.len()
            && self
                .modules
                .iter()
                .zip(other.modules.iter())
                .all(|(a, b)| a.name() == b.name())
    }
}
