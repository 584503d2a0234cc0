//! Extraction errors.

use std::path::PathBuf;

/// Errors that can occur while reading a dump or writing its objects.
///
/// Malformed markers are not represented here: the scanner degrades
/// to treating such lines as plain content.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Dump file not found: {}", path.display())]
    DumpNotFound { path: PathBuf },

    #[error("Failed to read dump file {}: {source}", path.display())]
    ReadDump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteObject {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Whether this error concerns a single output object rather than the whole run.
    pub fn is_object_failure(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::WriteObject { .. })
    }

    /// The filesystem path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DumpNotFound { path }
            | Self::ReadDump { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteObject { path, .. } => path,
        }
    }
}
