//! Destinations for extracted objects.
//!
//! [`ObjectWriter`] is the seam between the scanning pipeline and the
//! filesystem. [`FsObjectWriter`] writes `.pe` files under a destination
//! directory; [`DryRunWriter`] only records what would be written.

mod dry_run;
mod fs;

pub use dry_run::{DryRunWriter, PlannedObject};
pub use fs::FsObjectWriter;

use crate::error::ExtractError;
use crate::extract::ObjectRecord;

/// Something that can persist an extracted object.
pub trait ObjectWriter {
    /// Write one record, replacing any previous content.
    ///
    /// Returns the number of bytes written.
    fn write_object(&mut self, record: &ObjectRecord) -> Result<u64, ExtractError>;
}
