//! Parsing boundary: adapter trait and the clap-backed implementation
//!
//! The flag tokenizer is an external collaborator. An adapter turns a
//! merged specification plus raw arguments into parsed options and
//! leftover positionals; the framework never inspects argument syntax
//! itself.

use std::collections::BTreeMap;

use clap::{Arg, ArgAction, Command};
use tracing::debug;

use crate::config::ParserConfig;
use crate::domain::{Arity, OptionSpecification, OptionValue, ParseError, ParsedOptions};

/// Boundary to the flag-tokenization engine.
pub trait ParsingAdapter: Send + Sync {
    /// Parse `raw_args` against `spec`.
    ///
    /// Returns parsed options plus leftover positional arguments, or a
    /// [`ParseError`] carrying the engine's message. `parser_config` is
    /// handed through from the application unmodified; each adapter honors
    /// the settings its engine supports.
    fn parse(
        &self,
        spec: &OptionSpecification,
        raw_args: &[String],
        parser_config: &ParserConfig,
    ) -> Result<(ParsedOptions, Vec<String>), ParseError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Id of the synthetic positional arg collecting leftover arguments.
/// Descriptor names cannot start with `_`, so it can never collide.
const REST_ID: &str = "__rest";

/// Adapter backed by clap's builder API.
///
/// Mapping: primary name → long option, single-character aliases → short
/// options, longer aliases → long aliases; flags use `SetTrue`, scalars
/// `Set`. `allow_abbreviation` maps to clap's `infer_long_args`. With
/// `case_sensitive: false`, long-option tokens are lower-cased before
/// parsing (declare names in lower case for this to round-trip).
/// Short-flag bundling follows clap's native behavior regardless of the
/// `bundling` setting.
///
/// `--help` surfaces as a [`ParseError`] with
/// [`HelpRequested`](crate::domain::ParseErrorKind::HelpRequested) carrying
/// clap's rendered help text.
#[derive(Debug)]
pub struct ClapAdapter {
    app_name: String,
}

impl Default for ClapAdapter {
    fn default() -> Self {
        Self::named(env!("CARGO_PKG_NAME"))
    }
}

impl ClapAdapter {
    /// Adapter whose help/usage output carries `app_name`.
    pub fn named(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn build_command(&self, spec: &OptionSpecification, parser_config: &ParserConfig) -> Command {
        let mut cmd = Command::new(self.app_name.clone())
            .no_binary_name(true)
            .infer_long_args(parser_config.allow_abbreviation);

        for entry in spec.entries() {
            let descriptor = entry.descriptor();
            let mut arg = Arg::new(descriptor.key())
                .long(descriptor.primary().to_string())
                .help(descriptor.description().to_string());

            let mut has_short = false;
            for alias in descriptor.aliases() {
                let mut chars = alias.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        if has_short {
                            arg = arg.short_alias(c);
                        } else {
                            arg = arg.short(c);
                            has_short = true;
                        }
                    }
                    _ => {
                        arg = arg.visible_alias(alias.to_string());
                    }
                }
            }

            arg = match descriptor.arity() {
                Arity::Flag => arg.action(ArgAction::SetTrue),
                Arity::Scalar => arg.action(ArgAction::Set).value_name("VALUE"),
            };
            cmd = cmd.arg(arg);
        }

        cmd.arg(
            Arg::new(REST_ID)
                .value_name("ARGS")
                .num_args(0..)
                .help("Positional arguments passed through to the application"),
        )
    }
}

impl ParsingAdapter for ClapAdapter {
    fn parse(
        &self,
        spec: &OptionSpecification,
        raw_args: &[String],
        parser_config: &ParserConfig,
    ) -> Result<(ParsedOptions, Vec<String>), ParseError> {
        let args = if parser_config.case_sensitive {
            raw_args.to_vec()
        } else {
            fold_long_option_case(raw_args)
        };

        let cmd = self.build_command(spec, parser_config);
        let matches = cmd.try_get_matches_from(&args).map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                ParseError::help(e.to_string())
            }
            _ => ParseError::invalid(e.to_string()),
        })?;

        let mut values = BTreeMap::new();
        for entry in spec.entries() {
            let descriptor = entry.descriptor();
            let key = descriptor.key();
            match descriptor.arity() {
                Arity::Flag => {
                    if matches.get_flag(&key) {
                        values.insert(key, OptionValue::Flag(true));
                    }
                }
                Arity::Scalar => {
                    if let Some(value) = matches.get_one::<String>(&key) {
                        values.insert(key, OptionValue::Scalar(value.clone()));
                    }
                }
            }
        }

        let remaining: Vec<String> = matches
            .get_many::<String>(REST_ID)
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default();

        debug!(
            "parse: {} options set, {} leftover args",
            values.len(),
            remaining.len()
        );

        let parsed =
            ParsedOptions::new(spec, values).map_err(|e| ParseError::invalid(e.to_string()))?;
        Ok((parsed, remaining))
    }
}

/// Lower-case the name part of `--name[=value]` tokens. Everything after a
/// bare `--` separator is positional and left untouched.
fn fold_long_option_case(raw_args: &[String]) -> Vec<String> {
    let mut folded = Vec::with_capacity(raw_args.len());
    let mut passthrough = false;
    for token in raw_args {
        if passthrough || !token.starts_with("--") {
            folded.push(token.clone());
            continue;
        }
        if token == "--" {
            passthrough = true;
            folded.push(token.clone());
            continue;
        }
        match token.split_once('=') {
            Some((name, value)) => folded.push(format!("{}={}", name.to_ascii_lowercase(), value)),
            None => folded.push(token.to_ascii_lowercase()),
        }
    }
    folded
}
