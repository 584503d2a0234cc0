//! Development tasks for dmpextract.
//!
//! Usage: `cargo run -p xtask -- man [--out-dir <DIR>]`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the dmpextract(1) man page
    Man {
        /// Directory to write dmpextract.1 into
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(out_dir),
    }
}

fn generate_man(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = dmpextract::cli::Cli::command();
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command)
        .render(&mut buffer)
        .context("Failed to render man page")?;

    let path = out_dir.join("dmpextract.1");
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
