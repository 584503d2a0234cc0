//! dmpextract command-line entry point.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use dmpextract::cli::{self, Cli};

fn main() -> Result<()> {
    let args: Vec<_> = std::env::args_os().collect();
    if cli::is_legacy_version_request(&args) {
        println!("{}", cli::version_banner());
        return Ok(());
    }

    let cli = Cli::parse_from(args);
    dmpextract::logging::init(cli.verbose);

    let Some(dump) = cli.dumpfile.as_deref() else {
        // No dump given: show usage instead of failing
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    commands::extract::handle(&cli, dump)
}
