//! Backing document on disk
//!
//! The whole collection is read once at startup and rewritten in full
//! on every mutation. No diffing, no incremental writes.

pub mod json_document;
