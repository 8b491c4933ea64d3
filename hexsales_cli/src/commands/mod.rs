//! CLI subcommand implementations.

pub mod articles;
pub mod stats;
