//! Filesystem object writer.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::ObjectWriter;
use crate::error::ExtractError;
use crate::extract::ObjectRecord;

/// Writes each object to `<root>/<record path>`, creating parent directories.
#[derive(Debug, Clone)]
pub struct FsObjectWriter {
    root: PathBuf,
}

impl FsObjectWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute (or root-relative) target path of a record.
    pub fn target(&self, record: &ObjectRecord) -> PathBuf {
        self.root.join(&record.path)
    }
}

impl ObjectWriter for FsObjectWriter {
    fn write_object(&mut self, record: &ObjectRecord) -> Result<u64, ExtractError> {
        let target = self.target(record);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_err = |source| ExtractError::WriteObject {
            path: target.clone(),
            source,
        };

        let file = fs::File::create(&target).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for line in &record.lines {
            writeln!(writer, "{}", line).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        tracing::debug!(path = %target.display(), lines = record.lines.len(), "object written");
        Ok(record.content_len())
    }
}
