//! Writer that plans output without touching the disk.

use std::path::PathBuf;

use super::ObjectWriter;
use crate::error::ExtractError;
use crate::extract::ObjectRecord;

/// An object that would have been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedObject {
    pub path: PathBuf,
    pub lines: usize,
    pub bytes: u64,
}

/// Collects the objects an extraction would write.
#[derive(Debug, Default)]
pub struct DryRunWriter {
    planned: Vec<PlannedObject>,
}

impl DryRunWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Planned objects in write order.
    pub fn planned(&self) -> &[PlannedObject] {
        &self.planned
    }
}

impl ObjectWriter for DryRunWriter {
    fn write_object(&mut self, record: &ObjectRecord) -> Result<u64, ExtractError> {
        let bytes = record.content_len();
        self.planned.push(PlannedObject {
            path: record.path.clone(),
            lines: record.lines.len(),
            bytes,
        });
        Ok(bytes)
    }
}
