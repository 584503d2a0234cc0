//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture dump
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Write `lines` as a dump file inside `dir`, one `\n`-terminated line each
pub fn write_dump(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("Failed to write dump");
    path
}

/// Fresh scratch directory
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Read an extracted object relative to `root`
pub fn read_object(root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// All files below `root` as sorted `/`-separated relative paths
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files);
    files.sort();
    files
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read dir") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap();
            let parts: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(parts.join("/"));
        }
    }
}
