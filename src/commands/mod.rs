//! Command handlers for the dmpextract binary.

pub mod extract;
