#![allow(clippy::print_stdout, clippy::print_stderr)]

mod args;
mod handlers;

use crate::args::Cli;
use anyhow::Result;
use clap::Parser;
use limebird::InitOptions;
use limebird_logger::{LevelFilter, Logger};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level).init()?;

    let options = InitOptions { config_path: cli.config, mode: cli.mode };
    let registry = limebird::init(&options)?;

    let command = cli.command;
    debug!(?command, "Dispatching command");
    handlers::run(registry, command)
}
