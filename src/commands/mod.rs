//! Command implementations

pub mod base;
pub mod report;

pub use base::{Command, CommandContext};
pub use report::ReportCommand;
