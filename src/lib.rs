//! dmpextract - extract program objects from continuum dump files
//!
//! A continuum dump nests controllers and objects with begin/end markers.
//! Each object may carry a `ByteCode` .. `EndByteCode` block; this crate
//! writes every such block to `<destination>/<controller>/.../<object>.pe`.
//!
//! ```text
//! BeginController : A
//! Object : B
//! ByteCode
//! ...               ->  A/B.pe
//! EndByteCode
//! EndObject
//! EndController
//! ```

pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;

pub use config::{Config, ExtractConfig, WriteFailurePolicy};
pub use error::ExtractError;
pub use extract::{ExtractionStats, Extractor, ObjectRecord};
pub use output::{DryRunWriter, FsObjectWriter, ObjectWriter};
