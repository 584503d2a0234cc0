//! Extraction command handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use humansize::{format_size, BINARY};

use dmpextract::cli::Cli;
use dmpextract::{Config, DryRunWriter, ExtractionStats, Extractor, FsObjectWriter};

/// Extract every object of `dump` into the destination directory.
///
/// With `--dry-run` the planned files are listed and nothing is written.
/// Under the `skip` write policy, a run with failed objects still writes
/// everything else and then exits with an error.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, dump: &Path) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let extractor = Extractor::new(cli.extract_config(config.extract));
    tracing::debug!(config = ?extractor.config(), "effective extract settings");
    let destination = destination_dir(cli.destination.as_deref())?;

    if cli.dry_run {
        let mut writer = DryRunWriter::new();
        let stats = extractor.run(dump, &mut writer)?;
        for planned in writer.planned() {
            println!(
                "{}  ({} lines)",
                destination.join(&planned.path).display(),
                planned.lines
            );
        }
        println!("{}", summary(&stats, &destination, true));
        return Ok(());
    }

    let mut writer = FsObjectWriter::new(&destination);
    let stats = extractor.run(dump, &mut writer)?;
    println!("{}", summary(&stats, &destination, false));

    if stats.has_failures() {
        for path in &stats.failed {
            eprintln!("  not written: {}", destination.join(path).display());
        }
        bail!("{} object(s) could not be written", stats.failed.len());
    }

    Ok(())
}

/// Destination directory, defaulting to the current working directory.
fn destination_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

/// One-line run summary, e.g. `Extracted 12 objects (3.40 KiB) to out`.
fn summary(stats: &ExtractionStats, destination: &Path, dry_run: bool) -> String {
    let noun = if stats.written == 1 { "object" } else { "objects" };
    let verb = if dry_run { "Would extract" } else { "Extracted" };
    format!(
        "{} {} {} ({}) to {}",
        verb,
        stats.written,
        noun,
        format_size(stats.bytes_written, BINARY),
        destination.display()
    )
}
