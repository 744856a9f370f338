//! Environment configuration loading

use super::validation;
use crate::constants::env as env_vars;
use anyhow::Result;
use std::env;

/// Process-wide configuration, read once at startup and injected into every
/// component that needs it
#[derive(Debug, Clone)]
pub struct Config {
    /// Access token for the GitHub API
    pub token: String,
    /// Account whose repositories are aggregated
    pub username: String,
    /// Gist the report is published to
    pub gist_id: String,
    /// Language names dropped from the report after aggregation
    pub exclude_languages: Vec<String>,
    /// Repository full names never queried for languages
    pub exclude_repos: Vec<String>,
}

impl Config {
    /// Load and validate configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: validation::required(env_vars::GH_TOKEN, env::var(env_vars::GH_TOKEN).ok())?,
            username: validation::required(
                env_vars::GH_USERNAME,
                env::var(env_vars::GH_USERNAME).ok(),
            )?,
            gist_id: validation::required(env_vars::GIST_ID, env::var(env_vars::GIST_ID).ok())?,
            exclude_languages: parse_list(env::var(env_vars::EXCLUDE).ok()),
            exclude_repos: parse_list(env::var(env_vars::EXCLUDE_REPO).ok()),
        })
    }
}

/// Split a comma-separated variable into trimmed, non-empty entries
fn parse_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
