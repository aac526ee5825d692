//! Option descriptors: single declarative flag entries

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::{SpecError, SpecResult};

const NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

/// Whether an option is a bare switch or carries a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Boolean switch, present or absent (`--dbshow`)
    Flag,
    /// Takes one string value (`--dbname Emma`)
    Scalar,
}

/// One declared option: ordered names (first is primary, rest are aliases),
/// arity, description, and free-form metadata.
///
/// Immutable once created. Constructors validate the name invariants so an
/// invalid declaration fails at configuration time, not during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    names: Vec<String>,
    arity: Arity,
    description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

impl OptionDescriptor {
    /// Declare a boolean switch.
    pub fn flag<I, S>(names: I, description: &str) -> SpecResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names.into_iter().map(Into::into).collect(),
            Arity::Flag,
            description,
        )
    }

    /// Declare an option taking one scalar value.
    pub fn scalar<I, S>(names: I, description: &str) -> SpecResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names.into_iter().map(Into::into).collect(),
            Arity::Scalar,
            description,
        )
    }

    /// Parse a textual declaration in the classic getopt style.
    ///
    /// Names are separated by `|`; a `=s`/`=i`/`=f` suffix declares a
    /// scalar value, a trailing `!` (or no suffix) declares a flag:
    ///
    /// - `"dbname|db=s"`: scalar with alias `db`
    /// - `"dbshow!"` or `"dbshow"`: boolean flag
    pub fn from_decl(decl: &str, description: &str) -> SpecResult<Self> {
        let trimmed = decl.trim();
        if trimmed.is_empty() {
            return Err(SpecError::InvalidDeclaration {
                decl: decl.to_string(),
                reason: "empty declaration".to_string(),
            });
        }

        let (names_part, arity) = if let Some((names, value_type)) = trimmed.split_once('=') {
            match value_type {
                "s" | "i" | "f" => (names, Arity::Scalar),
                other => {
                    return Err(SpecError::InvalidDeclaration {
                        decl: decl.to_string(),
                        reason: format!("unsupported value type {other:?}"),
                    })
                }
            }
        } else if let Some(names) = trimmed.strip_suffix('!') {
            (names, Arity::Flag)
        } else {
            (trimmed, Arity::Flag)
        };

        let names: Vec<String> = names_part
            .split('|')
            .map(|name| name.trim().to_string())
            .collect();
        Self::new(names, arity, description)
    }

    fn new(names: Vec<String>, arity: Arity, description: &str) -> SpecResult<Self> {
        validate_names(&names)?;
        Ok(Self {
            names,
            arity,
            description: description.to_string(),
            metadata: BTreeMap::new(),
        })
    }

    /// Attach a metadata entry (builder style).
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// All declared names, primary first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The primary name (first declared).
    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    /// Alias names (everything after the primary).
    pub fn aliases(&self) -> &[String] {
        &self.names[1..]
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Accessor key on [`ParsedOptions`](crate::domain::ParsedOptions):
    /// the primary name, normalized.
    pub fn key(&self) -> String {
        normalize_key(self.primary())
    }

    /// Whether `name` matches any declared name exactly.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Normalize an option name into its accessor key: lower-cased, with `-`
/// separators turned into `_`.
pub fn normalize_key(name: &str) -> String {
    name.to_ascii_lowercase().replace('-', "_")
}

fn validate_names(names: &[String]) -> SpecResult<()> {
    if names.is_empty() {
        return Err(SpecError::EmptyNames);
    }
    let pattern = Regex::new(NAME_PATTERN).map_err(|e| SpecError::InvalidName {
        name: names[0].clone(),
        reason: format!("compile name pattern: {e}"),
    })?;
    for name in names {
        if !pattern.is_match(name) {
            return Err(SpecError::InvalidName {
                name: name.clone(),
                reason: "names must start with a letter and contain only letters, digits, '-' or '_'"
                    .to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("dbname", "dbname")]
    #[case("DbName", "dbname")]
    #[case("db-name", "db_name")]
    #[case("Allow-Abbrev", "allow_abbrev")]
    fn given_name_when_normalizing_then_key_is_lowercase_underscored(
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(normalize_key(name), expected);
    }

    #[test]
    fn given_scalar_declaration_when_parsing_then_names_and_arity_match() {
        let descriptor = OptionDescriptor::from_decl("dbname|db=s", "database name").unwrap();

        assert_eq!(descriptor.primary(), "dbname");
        assert_eq!(descriptor.aliases(), &["db".to_string()]);
        assert_eq!(descriptor.arity(), Arity::Scalar);
        assert_eq!(descriptor.key(), "dbname");
    }

    #[rstest]
    #[case("dbshow!")]
    #[case("dbshow")]
    fn given_flag_declaration_when_parsing_then_arity_is_flag(#[case] decl: &str) {
        let descriptor = OptionDescriptor::from_decl(decl, "show settings").unwrap();
        assert_eq!(descriptor.arity(), Arity::Flag);
        assert_eq!(descriptor.primary(), "dbshow");
    }

    #[test]
    fn given_unsupported_value_type_when_parsing_then_fails() {
        let result = OptionDescriptor::from_decl("dbname=x", "database name");
        assert!(matches!(
            result,
            Err(SpecError::InvalidDeclaration { .. })
        ));
    }

    #[test]
    fn given_empty_name_list_when_constructing_then_fails() {
        let result = OptionDescriptor::flag(Vec::<String>::new(), "nothing");
        assert_eq!(result, Err(SpecError::EmptyNames));
    }

    #[rstest]
    #[case("")]
    #[case("1db")]
    #[case("db name")]
    #[case("--dbname")]
    fn given_malformed_name_when_constructing_then_fails(#[case] name: &str) {
        let result = OptionDescriptor::scalar([name], "bad");
        assert!(matches!(result, Err(SpecError::InvalidName { .. })));
    }

    #[test]
    fn given_metadata_when_building_then_readable() {
        let descriptor = OptionDescriptor::scalar(["dbname"], "database name")
            .unwrap()
            .with_metadata("env", "DBNAME");

        assert_eq!(
            descriptor.metadata().get("env"),
            Some(&"DBNAME".to_string())
        );
    }
}
