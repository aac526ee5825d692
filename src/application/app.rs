//! Application lifecycle: compose, parse, validate
//!
//! One `Application` instance handles one command invocation. The state
//! machine is `unconfigured → configured → parsed → validated`; finishing
//! a cycle (or calling [`Application::reset`]) makes the instance reusable
//! for the next invocation. Concurrent reuse is unsupported.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::application::composer::compose;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::ParserConfig;
use crate::domain::{
    OptionModule, OptionSpecification, ParsedOptions, ValidationContext,
};
use crate::infrastructure::traits::{ClapAdapter, ParsingAdapter};

/// Lifecycle state of an [`Application`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Unconfigured,
    Configured,
    Parsed,
    Validated,
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppState::Unconfigured => "unconfigured",
            AppState::Configured => "configured",
            AppState::Parsed => "parsed",
            AppState::Validated => "validated",
        };
        f.write_str(label)
    }
}

/// Orchestrates option composition, argument parsing, and the per-module
/// validation chain.
pub struct Application {
    name: String,
    adapter: Arc<dyn ParsingAdapter>,
    parser_config: ParserConfig,
    state: AppState,
    spec: Option<OptionSpecification>,
    usage: Option<String>,
    parsed: Option<ParsedOptions>,
    remaining: Vec<String>,
}

impl Application {
    /// Create an application using the default clap-backed adapter.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let adapter = Arc::new(ClapAdapter::named(name.clone()));
        Self::with_adapter(name, adapter)
    }

    /// Create an application with a custom parsing adapter (for testing or
    /// alternative engines).
    pub fn with_adapter(name: impl Into<String>, adapter: Arc<dyn ParsingAdapter>) -> Self {
        Self {
            name: name.into(),
            adapter,
            parser_config: ParserConfig::default(),
            state: AppState::Unconfigured,
            spec: None,
            usage: None,
            parsed: None,
            remaining: Vec::new(),
        }
    }

    /// Compose `modules` into the merged specification and store it.
    ///
    /// Allowed from `unconfigured`, or from `validated` to start a fresh
    /// cycle. A [`SpecError::DuplicateOption`](crate::domain::SpecError)
    /// surfaces immediately: the application fails to start.
    pub fn configure(
        &mut self,
        modules: Vec<Arc<dyn OptionModule>>,
        usage: Option<String>,
        parser_config: ParserConfig,
    ) -> ApplicationResult<()> {
        if !matches!(self.state, AppState::Unconfigured | AppState::Validated) {
            return Err(ApplicationError::State {
                operation: "configure",
                expected: "unconfigured or validated",
                found: self.state,
            });
        }

        let spec = compose(&modules)?;
        debug!(
            "configure: {} descriptors from {} modules",
            spec.len(),
            modules.len()
        );

        self.spec = Some(spec);
        self.usage = usage;
        self.parser_config = parser_config;
        self.parsed = None;
        self.remaining.clear();
        self.state = AppState::Configured;
        Ok(())
    }

    /// Parse `raw_args` through the adapter against the stored spec.
    ///
    /// On adapter failure the state does not advance; the caller reports
    /// the error and the user re-invokes with corrected input.
    pub fn parse(&mut self, raw_args: &[String]) -> ApplicationResult<()> {
        if matches!(self.state, AppState::Unconfigured) {
            return Err(ApplicationError::State {
                operation: "parse",
                expected: "configured",
                found: self.state,
            });
        }
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| ApplicationError::Internal("no specification after configure".into()))?;

        let (parsed, remaining) = self.adapter.parse(spec, raw_args, &self.parser_config)?;
        debug!(
            "parse: {} options set, {} leftover args",
            parsed.present_count(),
            remaining.len()
        );

        self.parsed = Some(parsed);
        self.remaining = remaining;
        self.state = AppState::Parsed;
        Ok(())
    }

    /// Run every contributing module's validation hook in composition
    /// order, passing each the same parsed options and leftover args.
    ///
    /// Chain-of-responsibility, not a pipeline: no module transforms the
    /// data for the next. The first failing hook halts the chain and the
    /// state stays `parsed`; re-running is deterministic.
    pub fn validate(&mut self) -> ApplicationResult<()> {
        if !matches!(self.state, AppState::Parsed | AppState::Validated) {
            return Err(ApplicationError::State {
                operation: "validate",
                expected: "parsed",
                found: self.state,
            });
        }
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| ApplicationError::Internal("no specification in parsed state".into()))?;
        let parsed = self
            .parsed
            .as_ref()
            .ok_or_else(|| ApplicationError::Internal("no parsed options in parsed state".into()))?;

        let modules: Vec<Arc<dyn OptionModule>> = spec.modules().to_vec();
        let ctx = ValidationContext {
            app_name: &self.name,
            usage: self.usage.as_deref(),
            parsed,
            remaining: &self.remaining,
        };
        for module in &modules {
            debug!("validate: running module {}", module.name());
            module.validate_opts(&ctx)?;
        }

        self.state = AppState::Validated;
        Ok(())
    }

    /// Convenience: parse then validate, returning the results.
    ///
    /// Requires a prior [`configure`](Self::configure).
    pub fn run(&mut self, raw_args: &[String]) -> ApplicationResult<(ParsedOptions, Vec<String>)> {
        if matches!(self.state, AppState::Unconfigured) {
            return Err(ApplicationError::State {
                operation: "run",
                expected: "configured",
                found: self.state,
            });
        }
        self.parse(raw_args)?;
        self.validate()?;

        let parsed = self
            .parsed
            .clone()
            .ok_or_else(|| ApplicationError::Internal("no parsed options after validate".into()))?;
        Ok((parsed, self.remaining.clone()))
    }

    /// Drop all per-invocation state and return to `unconfigured`.
    pub fn reset(&mut self) {
        self.spec = None;
        self.usage = None;
        self.parsed = None;
        self.remaining.clear();
        self.state = AppState::Unconfigured;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn spec(&self) -> Option<&OptionSpecification> {
        self.spec.as_ref()
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// Parsed options of the current cycle, if parsing has happened.
    pub fn parsed(&self) -> Option<&ParsedOptions> {
        self.parsed.as_ref()
    }

    /// Leftover positional arguments of the current cycle.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }
}
