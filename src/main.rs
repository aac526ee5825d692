use std::process;
use std::sync::Arc;

use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rsopt::application::Application;
use rsopt::cli::db::{DbExtraOptions, DbOptions};
use rsopt::cli::error::CliResult;
use rsopt::config::ParserConfig;
use rsopt::domain::OptionModule;
use rsopt::exitcode;

const USAGE: &str = "rsopt [--dbname NAME] [--dbhost HOST] [--dbport PORT] [--dbuser USER] \
[--dbpasswd PASSWD] [--dbsocket PATH] [--dbshow] [ARGS]...";

fn main() {
    setup_logging();

    match run() {
        Ok(()) => process::exit(exitcode::OK),
        Err(e) => {
            if let Some(help) = e.help_text() {
                println!("{}", help);
                process::exit(exitcode::OK);
            }
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(e.exit_code());
        }
    }
}

fn run() -> CliResult<()> {
    let parser_config = ParserConfig::load(None)?;
    let modules: Vec<Arc<dyn OptionModule>> = vec![
        Arc::new(DbOptions::new()?),
        Arc::new(DbExtraOptions::new()?),
    ];

    let mut app = Application::new("rsopt");
    app.configure(modules, Some(USAGE.to_string()), parser_config)?;

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let (_parsed, remaining) = app.run(&raw)?;

    if !remaining.is_empty() {
        debug!("leftover arguments: {:?}", remaining);
    }
    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
