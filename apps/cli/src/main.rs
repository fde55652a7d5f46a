//! `flagcheck`: declares a flag set, parses this process's arguments (or the
//! flag file named by `-is <path>`), and prints every flag's value.
//!
//! Exits with status 1 when called without arguments.

mod config;
mod report;

use crate::config::{AppConfig, CONFIG_PATH_ENV, load_config};
use cmdline::{CmdParser, ParseError};
use cmdline_logger::{LevelFilter, Logger};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

// Failures return from `main` instead of exiting in place, so the logger guard
// is dropped and file logs are flushed first.
#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<ExitCode> {
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let _logger = init_logger(&config)?;

    let mut parser = CmdParser::with_config(config.parser);
    report::declare_flags(&mut parser, &config.flags);

    match parser.try_parse(std::env::args().skip(1)) {
        Ok(()) => {},
        Err(ParseError::NoArguments) => {
            error!("{}", ParseError::NoArguments);
            return Ok(ExitCode::FAILURE);
        },
        Err(e) => anyhow::bail!("Command line parsing error: {e}"),
    }

    print!("{}", report::render(&parser));
    Ok(ExitCode::SUCCESS)
}

fn init_logger(config: &AppConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter = config
        .log
        .level
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {e}", config.log.level))?;

    let mut builder =
        Logger::builder().name(env!("CARGO_BIN_NAME")).level(level).ansi(config.log.ansi);
    if let Some(filter) = &config.log.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(path) = &config.log.path {
        builder = builder.path(path);
    }

    Ok(builder.init()?)
}
