//! Per-repository language breakdowns

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use std::collections::HashMap;

impl GitHubClient {
    /// Fetch the language breakdown for one repository: a mapping from
    /// language name to byte count, returned verbatim as reported by GitHub.
    pub async fn list_languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>> {
        let response = self
            .get(&format!("/repos/{}/{}/languages", owner, repo))
            .send()
            .await?;
        let response = self.fail_for_status("Listing languages", response)?;

        let languages: HashMap<String, u64> = response.json().await.with_context(|| {
            format!("Failed to parse language response for {}/{}", owner, repo)
        })?;
        Ok(languages)
    }
}
