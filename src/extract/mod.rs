//! Object extraction pipeline.
//!
//! Lines flow through four stages:
//!
//! 1. [`path`] tags each line with the section path that owns it
//! 2. [`group`] collects lines per path, merging revisited paths
//! 3. [`bytecode`] cuts the `ByteCode` .. `EndByteCode` block out of a group
//! 4. [`blank`] collapses the doubled blank lines the dump format produces
//!
//! [`Extractor`] drives the stages and hands finished [`ObjectRecord`]s to an
//! [`crate::output::ObjectWriter`].
//!
//! # Design
//!
//! Tagging and blank-run collapsing are lazy iterator adaptors over pure
//! state machines ([`ScanState`], [`BlankRun`]). Grouping has to buffer: a
//! path can be reopened later in the dump, and its lines belong to the same
//! object, so no group is complete until the input ends.

mod blank;
mod bytecode;
mod extractor;
mod group;
mod path;
mod record;

pub use blank::{collapse_blank_runs, BlankRun, CollapseBlankRuns};
pub use bytecode::byte_code_block;
pub use extractor::{ExtractionStats, Extractor};
pub use group::ObjectGroups;
pub use path::{tag_lines, ScanState, SectionPath, TagLines, PATH_SEPARATOR};
pub use record::{relative_path, ObjectRecord, OBJECT_EXTENSION};

/// Group an in-memory line sequence by owning path.
pub fn group_lines<I>(lines: I) -> ObjectGroups
where
    I: IntoIterator<Item = String>,
{
    tag_lines(lines).collect()
}

/// Group a fallible line stream, stopping at the first read error.
pub fn try_group_lines<I, E>(lines: I) -> Result<ObjectGroups, E>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    let mut state = ScanState::new();
    let mut groups = ObjectGroups::new();
    for line in lines {
        let line = line?;
        state.advance(&line);
        groups.push(&state.path().render(), line);
    }
    Ok(groups)
}
