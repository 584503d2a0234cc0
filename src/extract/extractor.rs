//! Pipeline orchestration.

use std::path::{Path, PathBuf};

use super::{byte_code_block, collapse_blank_runs, try_group_lines, ObjectGroups, ObjectRecord};
use crate::config::{ExtractConfig, WriteFailurePolicy};
use crate::dump::DumpReader;
use crate::error::ExtractError;
use crate::output::ObjectWriter;

/// Counters collected over one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Lines read from the dump
    pub lines_read: usize,
    /// Distinct non-empty section paths
    pub objects: usize,
    /// Objects handed to the writer successfully
    pub written: usize,
    /// Objects without a `ByteCode` marker
    pub without_byte_code: usize,
    /// Objects whose block was empty after collapsing
    pub empty_blocks: usize,
    /// Objects whose path had no usable segment
    pub unnamed: usize,
    /// Blank lines removed by run collapsing
    pub blank_lines_dropped: usize,
    pub bytes_written: u64,
    /// Objects that failed to write under [`WriteFailurePolicy::Skip`]
    pub failed: Vec<PathBuf>,
}

impl ExtractionStats {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Turns dump lines into `.pe` objects.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Build output records from grouped lines.
    ///
    /// Groups without a byte-code block, or whose block is empty after
    /// collapsing, produce no record.
    pub fn records(&self, groups: ObjectGroups, stats: &mut ExtractionStats) -> Vec<ObjectRecord> {
        stats.objects += groups.len();
        let mut records = Vec::new();

        for (key, lines) in groups {
            let Some(block) = byte_code_block(&lines) else {
                tracing::debug!(object = %key, "no byte code, skipping");
                stats.without_byte_code += 1;
                continue;
            };

            let code: Vec<String> = if self.config.collapse_blank_runs {
                let mut collapsed = collapse_blank_runs(block.iter());
                let code: Vec<String> = collapsed.by_ref().cloned().collect();
                stats.blank_lines_dropped += collapsed.dropped();
                code
            } else {
                block.to_vec()
            };

            if code.is_empty() {
                tracing::debug!(object = %key, "empty byte code block, skipping");
                stats.empty_blocks += 1;
                continue;
            }

            match ObjectRecord::new(key, code) {
                Some(record) => records.push(record),
                None => stats.unnamed += 1,
            }
        }

        records
    }

    /// Extract records from in-memory lines. No I/O.
    pub fn extract_lines<I>(&self, lines: I) -> (Vec<ObjectRecord>, ExtractionStats)
    where
        I: IntoIterator<Item = String>,
    {
        let mut stats = ExtractionStats::default();
        let mut counted = 0;
        let groups = super::group_lines(lines.into_iter().inspect(|_| counted += 1));
        stats.lines_read = counted;
        let records = self.records(groups, &mut stats);
        (records, stats)
    }

    /// Hand records to `writer`, applying the configured failure policy.
    pub fn write_records<W>(
        &self,
        records: &[ObjectRecord],
        writer: &mut W,
        stats: &mut ExtractionStats,
    ) -> Result<(), ExtractError>
    where
        W: ObjectWriter + ?Sized,
    {
        for record in records {
            match writer.write_object(record) {
                Ok(bytes) => {
                    stats.written += 1;
                    stats.bytes_written += bytes;
                }
                Err(err)
                    if err.is_object_failure()
                        && self.config.on_write_error == WriteFailurePolicy::Skip =>
                {
                    tracing::warn!(object = %record.key, error = %err, "skipping object");
                    stats.failed.push(record.path.clone());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Read `dump`, extract every object and write it through `writer`.
    pub fn run<P, W>(&self, dump: P, writer: &mut W) -> Result<ExtractionStats, ExtractError>
    where
        P: AsRef<Path>,
        W: ObjectWriter + ?Sized,
    {
        let dump = dump.as_ref();
        let mut reader = DumpReader::open(dump)?;
        let groups = try_group_lines(reader.by_ref()).map_err(|source| ExtractError::ReadDump {
            path: dump.to_path_buf(),
            source,
        })?;

        let mut stats = ExtractionStats {
            lines_read: reader.line_number(),
            ..Default::default()
        };
        let records = self.records(groups, &mut stats);
        self.write_records(&records, writer, &mut stats)?;

        tracing::info!(
            dump = %dump.display(),
            lines = stats.lines_read,
            objects = stats.objects,
            written = stats.written,
            failed = stats.failed.len(),
            "extraction finished"
        );
        Ok(stats)
    }
}
