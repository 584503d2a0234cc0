//! Integration tests for dmpextract

mod extract_test;
mod helpers;
