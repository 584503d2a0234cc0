//! Byte-code block extraction.

use crate::dump::{is_byte_code_end, is_byte_code_start};

/// The lines strictly between the first `ByteCode` marker and the next
/// `EndByteCode` marker.
///
/// Returns `None` when the group has no start marker. A block without an
/// end marker runs to the end of the group.
pub fn byte_code_block(lines: &[String]) -> Option<&[String]> {
    let start = lines.iter().position(|line| is_byte_code_start(line))? + 1;
    let body = &lines[start..];
    let len = body
        .iter()
        .position(|line| is_byte_code_end(line))
        .unwrap_or(body.len());
    Some(&body[..len])
}
