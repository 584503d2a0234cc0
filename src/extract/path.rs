//! Hierarchical path tracking over nested section markers.
//!
//! The tracker is a left fold with state `(path, previous line)`. An end
//! marker still belongs to the section it closes; the pop only takes
//! effect on the line after it.

use std::fmt;

use crate::dump::Marker;

/// Separator used when rendering a path to a group key.
pub const PATH_SEPARATOR: char = '/';

/// The values of the currently open sections, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPath {
    segments: Vec<String>,
}

impl SectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Remove the innermost segment. Popping an empty path is a no-op.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True when no non-empty segment is open, i.e. the line is outside any object.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.is_empty())
    }

    /// Render as a group key. Empty segments (from `Object :`) are skipped.
    pub fn render(&self) -> String {
        let mut key = String::new();
        for segment in self.segments.iter().filter(|s| !s.is_empty()) {
            if !key.is_empty() {
                key.push(PATH_SEPARATOR);
            }
            key.push_str(segment);
        }
        key
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Accumulator of the path fold.
///
/// Only the classification of the previous line matters, so the state
/// keeps a flag instead of the whole line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    path: SectionPath,
    previous_was_end: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the fold by one line.
    ///
    /// 1. If the previous line was a section end, pop one segment
    /// 2. If this line is a section start, push its value
    ///
    /// Afterwards [`ScanState::path`] is the owning path of `line`.
    pub fn step(mut self, line: &str) -> Self {
        self.advance(line);
        self
    }

    /// In-place form of [`ScanState::step`].
    pub fn advance(&mut self, line: &str) {
        if self.previous_was_end {
            if let Some(closed) = self.path.pop() {
                tracing::trace!(section = %closed, depth = self.path.depth(), "section closed");
            }
        }

        let marker = Marker::classify(line);
        if let Marker::SectionStart { value } = marker {
            self.path.push(value);
            tracing::trace!(section = value, depth = self.path.depth(), "section opened");
        }

        self.previous_was_end = marker.is_section_end();
    }

    /// Owning path of the last line stepped over.
    pub fn path(&self) -> &SectionPath {
        &self.path
    }
}

/// Iterator adaptor tagging each line with its rendered owning path.
pub struct TagLines<I> {
    lines: I,
    state: ScanState,
}

impl<I> Iterator for TagLines<I>
where
    I: Iterator<Item = String>,
{
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.state.advance(&line);
        Some((self.state.path().render(), line))
    }
}

/// Lazily tag every line with the path in effect when it was read.
pub fn tag_lines<I>(lines: I) -> TagLines<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    TagLines {
        lines: lines.into_iter(),
        state: ScanState::new(),
    }
}
