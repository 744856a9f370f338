//! Gist retrieval and single-file updates

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single file inside a gist
#[derive(Deserialize, Debug, Clone)]
pub struct GistFile {
    pub filename: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Gist metadata as returned by the get call
///
/// Files deserialize into a `BTreeMap`, so iteration order is filename
/// order. Callers that care about "the first file" get a deterministic
/// answer regardless of how the platform serialized the object.
#[derive(Deserialize, Debug, Clone)]
pub struct Gist {
    pub files: BTreeMap<String, GistFile>,
}

#[derive(Serialize)]
pub(crate) struct UpdateGistPayload<'a> {
    files: BTreeMap<&'a str, FileContentPatch<'a>>,
}

#[derive(Serialize)]
pub(crate) struct FileContentPatch<'a> {
    content: &'a str,
}

impl GitHubClient {
    /// Fetch a gist's metadata, including its file set
    pub async fn get_gist(&self, gist_id: &str) -> Result<Gist> {
        let response = self.get(&format!("/gists/{}", gist_id)).send().await?;
        let response = self.fail_for_status("Fetching gist", response)?;

        let gist: Gist = response
            .json()
            .await
            .context("Failed to parse gist response")?;
        Ok(gist)
    }

    /// Overwrite the content of a single file in a gist
    ///
    /// Files not named in the payload are left untouched by the API, so this
    /// only ever writes the one target file.
    pub async fn update_gist_file(
        &self,
        gist_id: &str,
        filename: &str,
        content: &str,
    ) -> Result<()> {
        let payload = UpdateGistPayload {
            files: BTreeMap::from([(filename, FileContentPatch { content })]),
        };

        let response = self
            .patch(&format!("/gists/{}", gist_id))
            .json(&payload)
            .send()
            .await?;
        self.fail_for_status("Updating gist", response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_targets_exactly_one_file() {
        let payload = UpdateGistPayload {
            files: BTreeMap::from([("chart.txt", FileContentPatch { content: "line" })]),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["files"]["chart.txt"]["content"], "line");
        assert_eq!(json["files"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_gist_files_iterate_in_filename_order() {
        let body = r#"
            {
                "files": {
                    "z-notes.md": {"filename": "z-notes.md"},
                    "a-chart.txt": {"filename": "a-chart.txt", "content": "old"}
                }
            }
        "#;

        let gist: Gist = serde_json::from_str(body).unwrap();
        let first = gist.files.keys().next().unwrap();
        assert_eq!(first, "a-chart.txt");
    }
}
