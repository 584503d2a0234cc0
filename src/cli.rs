//! Command-line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ExtractConfig, WriteFailurePolicy};

/// Version shown by `--version` and the legacy `version` forms.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("DMPEXTRACT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DMPEXTRACT_BUILD_DATE"),
    ")"
);

/// `dmpextract <version>`
pub fn version_banner() -> String {
    format!("dmpextract {}", VERSION)
}

/// Extract program objects from a continuum dump into .pe files
#[derive(Parser, Debug)]
#[command(name = "dmpextract", version = VERSION)]
#[command(about = "Extract program objects from a continuum dump into .pe files")]
#[command(
    long_about = "Extract program objects from a continuum dump into .pe files.\n\n\
    Every object's byte code is written to <DESTINATION>/<controller>/.../<object>.pe, \
    following the nesting of BeginController / InfinetCtlr / Object sections in the dump."
)]
pub struct Cli {
    /// Continuum dump file to read
    #[arg(value_name = "DUMPFILE")]
    pub dumpfile: Option<PathBuf>,

    /// Directory to write .pe files into [default: current directory]
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Read settings from this TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep extracting when an object cannot be written
    #[arg(long)]
    pub keep_going: bool,

    /// Write blank lines exactly as they appear in the dump
    #[arg(long)]
    pub keep_blank_runs: bool,

    /// List the files that would be written without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn extract_config(&self, mut base: ExtractConfig) -> ExtractConfig {
        if self.keep_going {
            base.on_write_error = WriteFailurePolicy::Skip;
        }
        if self.keep_blank_runs {
            base.collapse_blank_runs = false;
        }
        base
    }
}

/// `dmpextract version` and `dmpextract -version`, kept for old scripts.
pub fn is_legacy_version_request(args: &[OsString]) -> bool {
    args.len() == 2 && (args[1] == "version" || args[1] == "-version")
}
