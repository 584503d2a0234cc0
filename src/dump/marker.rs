//! Classification of dump lines into section and byte-code markers.
//!
//! Section starts are `Key : Value` pairs, section ends are bare keywords
//! occupying the whole (trimmed) line. Byte-code markers are matched as
//! substrings anywhere in the line.

/// Keys that open a section when they appear as `Key : Value`.
pub const SECTION_STARTS: &[&str] = &["BeginController", "InfinetCtlr", "Object"];

/// Bare keywords that close the innermost open section.
pub const SECTION_ENDS: &[&str] = &["EndController", "EndInfinetCtlr", "EndObject"];

/// Substring marking the start of a byte-code block.
pub const BYTE_CODE_START: &str = "ByteCode";

/// Substring marking the end of a byte-code block.
pub const BYTE_CODE_END: &str = "EndByteCode";

/// A dump line classified by its textual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `BeginController : A`, `InfinetCtlr : B`, `Object : C`
    SectionStart { value: &'a str },
    /// `EndController`, `EndInfinetCtlr`, `EndObject`
    SectionEnd,
    ByteCodeStart,
    ByteCodeEnd,
    Plain,
}

impl<'a> Marker<'a> {
    /// Classify a line. Section markers take precedence over byte-code markers.
    pub fn classify(line: &'a str) -> Self {
        if is_section_end(line) {
            Marker::SectionEnd
        } else if let Some(value) = section_start_value(line) {
            Marker::SectionStart { value }
        } else if is_byte_code_end(line) {
            Marker::ByteCodeEnd
        } else if is_byte_code_start(line) {
            Marker::ByteCodeStart
        } else {
            Marker::Plain
        }
    }

    pub fn is_section_end(&self) -> bool {
        matches!(self, Marker::SectionEnd)
    }
}

/// Returns the trimmed value of a section start line, or `None`.
///
/// The line must split into exactly two parts on `:`; a line with no
/// colon or with several colons is never a start.
pub fn section_start_value(line: &str) -> Option<&str> {
    let mut parts = line.split(':');
    let key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    SECTION_STARTS
        .contains(&key.trim())
        .then_some(value.trim())
}

pub fn is_section_end(line: &str) -> bool {
    SECTION_ENDS.contains(&line.trim())
}

/// `ByteCode` anywhere in the line, but not as part of `EndByteCode`.
pub fn is_byte_code_start(line: &str) -> bool {
    line.contains(BYTE_CODE_START) && !line.contains(BYTE_CODE_END)
}

pub fn is_byte_code_end(line: &str) -> bool {
    line.contains(BYTE_CODE_END)
}
