//! Gistbar - publishes a language bar chart of your GitHub repositories to a gist

pub mod chart;
pub mod commands;
pub mod config;
pub mod constants;
pub mod gist;
pub mod stats;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, ReportCommand};
pub use config::Config;
