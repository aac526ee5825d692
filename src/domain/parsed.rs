//! Read-only parsed option values keyed by normalized name

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::error::{SpecError, SpecResult};
use crate::domain::spec::OptionSpecification;

/// Value of a single parsed option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionValue {
    Flag(bool),
    Scalar(String),
}

impl OptionValue {
    /// The scalar payload, if this value carries one.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            OptionValue::Scalar(value) => Some(value),
            OptionValue::Flag(_) => None,
        }
    }

    /// Truthiness: a present scalar counts as set.
    pub fn as_flag(&self) -> bool {
        match self {
            OptionValue::Flag(set) => *set,
            OptionValue::Scalar(_) => true,
        }
    }
}

/// Options produced by a parsing adapter, keyed by normalized primary name.
///
/// Lookups are checked against the descriptor set of the specification the
/// adapter parsed against: an unknown key is a detectable programmer error
/// ([`SpecError::UnknownOption`]), not a silent absent value. A declared
/// but absent key reads as `None` (scalars) or `false` (flags).
///
/// No mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    values: BTreeMap<String, OptionValue>,
    known: BTreeSet<String>,
}

impl ParsedOptions {
    /// Build from adapter output, rejecting keys the spec never declared.
    pub fn new(
        spec: &OptionSpecification,
        values: BTreeMap<String, OptionValue>,
    ) -> SpecResult<Self> {
        let known: BTreeSet<String> = spec.keys().collect();
        if let Some(key) = values.keys().find(|k| !known.contains(*k)) {
            return Err(SpecError::UnknownOption { key: key.clone() });
        }
        Ok(Self { values, known })
    }

    /// Raw value for a declared key; `None` when absent.
    pub fn get(&self, key: &str) -> SpecResult<Option<&OptionValue>> {
        self.check_known(key)?;
        Ok(self.values.get(key))
    }

    /// Scalar value for a declared key; `None` when absent or not a scalar.
    pub fn scalar(&self, key: &str) -> SpecResult<Option<&str>> {
        Ok(self.get(key)?.and_then(OptionValue::as_scalar))
    }

    /// Flag state for a declared key; absent reads as `false`.
    pub fn flag(&self, key: &str) -> SpecResult<bool> {
        Ok(self.get(key)?.map(OptionValue::as_flag).unwrap_or(false))
    }

    /// Whether a declared key was supplied at all.
    pub fn is_present(&self, key: &str) -> SpecResult<bool> {
        self.check_known(key)?;
        Ok(self.values.contains_key(key))
    }

    /// All declared keys (sorted), present or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Number of options actually supplied.
    pub fn present_count(&self) -> usize {
        self.values.len()
    }

    fn check_known(&self, key: &str) -> SpecResult<()> {
        if self.known.contains(key) {
            Ok(())
        } else {
            Err(SpecError::UnknownOption {
                key: key.to_string(),
            })
        }
    }
}
