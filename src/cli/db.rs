//! Database option modules, the canonical composition example
//!
//! [`DbOptions`] declares connection settings and checks that `dbport` is
//! numeric. [`DbExtraOptions`] extends it with a `--dbshow` switch that
//! prints the resolved settings (password redacted, absent values `n/a`).

use crate::domain::{
    extend_spec, OptionDescriptor, OptionModule, SpecResult, ValidationContext, ValidationError,
};

/// Connection options for a database-backed command.
pub struct DbOptions {
    descriptors: Vec<OptionDescriptor>,
}

impl DbOptions {
    pub fn new() -> SpecResult<Self> {
        let descriptors = vec![
            OptionDescriptor::from_decl("dbname=s", "database name")?,
            OptionDescriptor::from_decl("dbhost=s", "database host")?,
            OptionDescriptor::from_decl("dbport=s", "database port")?,
            OptionDescriptor::from_decl("dbuser=s", "database user")?,
            OptionDescriptor::from_decl("dbpasswd=s", "database password")?,
            OptionDescriptor::from_decl("dbsocket=s", "database socket path")?,
        ];
        Ok(Self { descriptors })
    }
}

impl OptionModule for DbOptions {
    fn name(&self) -> &str {
        "db"
    }

    fn opt_spec(&self) -> Vec<OptionDescriptor> {
        self.descriptors.clone()
    }

    fn validate_opts(&self, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        let port = ctx
            .parsed
            .scalar("dbport")
            .map_err(|e| ValidationError::new(self.name(), e.to_string()))?;
        if let Some(port) = port {
            if port.parse::<u16>().is_err() {
                return Err(ValidationError::new(
                    self.name(),
                    format!("dbport must be a port number, got {port:?}"),
                ));
            }
        }
        Ok(())
    }
}

/// Extends [`DbOptions`] with a switch showing the resolved settings.
pub struct DbExtraOptions {
    base: DbOptions,
    own: Vec<OptionDescriptor>,
}

impl DbExtraOptions {
    pub fn new() -> SpecResult<Self> {
        Ok(Self {
            base: DbOptions::new()?,
            own: vec![OptionDescriptor::from_decl(
                "dbshow!",
                "print resolved database settings",
            )?],
        })
    }
}

impl OptionModule for DbExtraOptions {
    fn name(&self) -> &str {
        "db-extra"
    }

    fn opt_spec(&self) -> Vec<OptionDescriptor> {
        extend_spec(&self.base, &self.own)
    }

    fn validate_opts(&self, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        let show = ctx
            .parsed
            .flag("dbshow")
            .map_err(|e| ValidationError::new(self.name(), e.to_string()))?;
        if !show {
            return Ok(());
        }

        for descriptor in self.opt_spec() {
            let key = descriptor.key();
            if key == "dbshow" {
                continue;
            }
            let value = ctx
                .parsed
                .scalar(&key)
                .map_err(|e| ValidationError::new(self.name(), e.to_string()))?;
            let display = match (key.as_str(), value) {
                ("dbpasswd", Some(_)) => "*****".to_string(),
                (_, Some(v)) => v.to_string(),
                (_, None) => "n/a".to_string(),
            };
            println!("{key:<10} {display}");
        }
        Ok(())
    }
}
