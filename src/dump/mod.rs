//! Continuum dump line source and marker vocabulary.
//!
//! A dump is a plain text file, usually produced on Windows. [`DumpReader`]
//! yields its lines one at a time with line endings removed; [`Marker`]
//! classifies each line for the extraction pipeline.

mod marker;

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ExtractError;

pub use marker::{
    is_byte_code_end, is_byte_code_start, is_section_end, section_start_value, Marker,
    BYTE_CODE_END, BYTE_CODE_START, SECTION_ENDS, SECTION_STARTS,
};

const BOM: char = '\u{feff}';

/// Lazily reads the lines of a dump.
///
/// - Splits on `\n` and strips a trailing `\r`
/// - Decodes leniently; invalid UTF-8 becomes U+FFFD instead of an error
/// - Drops a byte-order mark at the start of the first line
pub struct DumpReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl DumpReader<BufReader<fs::File>> {
    /// Open a dump file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExtractError::DumpNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ExtractError::ReadDump {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> DumpReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                let mut line = String::from_utf8_lossy(&self.buf).into_owned();
                if self.line_number == 0 && line.starts_with(BOM) {
                    line.remove(0);
                }
                self.line_number += 1;
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
