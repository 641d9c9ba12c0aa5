//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from recipe-domain.

mod collection;
pub mod in_memory;
pub mod json_file;
