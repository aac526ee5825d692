//! Parser configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsopt/rsopt.toml`
//! 3. Explicit config file, if given
//! 4. Environment variables: `RSOPT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Behavior switches handed through to the parsing adapter unmodified.
///
/// Adapters honor the settings their engine supports and document the
/// rest; see [`ClapAdapter`](crate::infrastructure::ClapAdapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Accept unambiguous abbreviations of long option names
    pub allow_abbreviation: bool,
    /// Match long option names case-sensitively
    pub case_sensitive: bool,
    /// Allow bundling of short flags (`-ab` for `-a -b`)
    pub bundling: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_abbreviation: false,
            case_sensitive: true,
            bundling: true,
        }
    }
}

/// Get the XDG config directory for rsopt.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsopt").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsopt.toml"))
}

impl ParserConfig {
    /// Load settings with layered precedence.
    ///
    /// `explicit` (if given) overrides the global file; `RSOPT_*`
    /// environment variables override both.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("allow_abbreviation", defaults.allow_abbreviation)
            .map_err(config_err)?
            .set_default("case_sensitive", defaults.case_sensitive)
            .map_err(config_err)?
            .set_default("bundling", defaults.bundling)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }
        if let Some(path) = explicit {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(Environment::with_prefix("RSOPT").try_parsing(true));

        let cfg = builder.build().map_err(config_err)?;
        cfg.try_deserialize().map_err(config_err)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rsopt parser configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rsopt/rsopt.toml
#   Env:    RSOPT_* environment variables (explicit overrides)

# Accept unambiguous abbreviations of long option names
# allow_abbreviation = false

# Match long option names case-sensitively
# case_sensitive = true

# Allow bundling of short flags (-ab for -a -b)
# bundling = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
