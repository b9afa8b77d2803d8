//! Subcommand implementations.

pub mod extend;
pub mod get;
pub mod prune;
pub mod update;
