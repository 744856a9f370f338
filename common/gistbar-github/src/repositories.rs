//! Owned-repository listing

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Repository descriptor as returned by the list call
///
/// Only the fields the aggregation consumes are kept: `name` keys the
/// per-repository language query, `full_name` is matched against the
/// exclusion list, and `fork` marks repositories that contribute nothing.
#[derive(Deserialize, Debug, Clone)]
pub struct OwnedRepo {
    pub name: String,
    pub full_name: String,
    pub fork: bool,
}

impl GitHubClient {
    /// List the authenticated user's own repositories, most recently updated
    /// first. Fetches a single page of up to 100 repositories; anything
    /// beyond that is silently omitted.
    pub async fn list_owned_repos(&self) -> Result<Vec<OwnedRepo>> {
        let response = self
            .get("/user/repos?type=owner&sort=updated&direction=desc&per_page=100")
            .send()
            .await?;
        let response = self.fail_for_status("Listing repositories", response)?;

        let repos: Vec<OwnedRepo> = response
            .json()
            .await
            .context("Failed to parse repository list response")?;
        Ok(repos)
    }
}
