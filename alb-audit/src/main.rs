use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod logging;
mod path_guard;
mod report_cmd;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.into()).context("failed to initialize logger")?;
    report_cmd::run_report(cli)
}
