//! Command implementations for the CLI

pub mod analyze;
pub mod play;
pub mod simulate;
