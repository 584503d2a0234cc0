//! Output records: one `.pe` file per object.

use std::path::{Component, Path, PathBuf};

use super::path::PATH_SEPARATOR;

/// Extension appended to every extracted object.
pub const OBJECT_EXTENSION: &str = "pe";

/// An extracted object ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Rendered section path, e.g. `Plant/AHU1/ReadCompressors`
    pub key: String,
    /// Relative file path, e.g. `Plant/AHU1/ReadCompressors.pe`
    pub path: PathBuf,
    /// Byte-code lines after blank-run collapsing
    pub lines: Vec<String>,
}

impl ObjectRecord {
    /// Build a record for `key`. Returns `None` if the key has no usable path segment.
    pub fn new(key: impl Into<String>, lines: Vec<String>) -> Option<Self> {
        let key = key.into();
        let path = relative_path(&key)?;
        Some(Self { key, path, lines })
    }

    /// Size of the file this record produces, with `\n` after every line.
    pub fn content_len(&self) -> u64 {
        self.lines.iter().map(|l| l.len() as u64 + 1).sum()
    }
}

/// Map a group key to a relative `.pe` path.
///
/// Only normal components survive, so values such as `..` or an absolute
/// `/etc` can never place a file outside the destination directory.
pub fn relative_path(key: &str) -> Option<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = key
        .split(PATH_SEPARATOR)
        .flat_map(|segment| Path::new(segment).components())
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    let last = parts.pop()?;
    let mut path: PathBuf = parts.into_iter().collect();
    let mut file_name = last.to_os_string();
    file_name.push(".");
    file_name.push(OBJECT_EXTENSION);
    path.push(file_name);
    Some(path)
}
