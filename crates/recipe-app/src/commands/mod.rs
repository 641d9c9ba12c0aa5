//! CLI Commands

pub mod check;
pub mod serve;

pub use check::CheckCommand;
pub use serve::ServeCommand;
