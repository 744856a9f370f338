//! Gist publishing

use anyhow::{Context, Result, anyhow};
use colored::*;
use gistbar_github::{Gist, GitHubClient};

/// Overwrite the first file of the target gist with the report text
///
/// The gist's current file set is read immediately before the write; the
/// write targets the first filename in that set and leaves every other file
/// alone.
pub async fn publish_report(client: &GitHubClient, gist_id: &str, report: &str) -> Result<()> {
    let gist = client.get_gist(gist_id).await.context("Unable to get gist")?;

    let filename = first_filename(&gist)
        .ok_or_else(|| anyhow!("No files found in gist {}", gist_id))?
        .to_string();

    client
        .update_gist_file(gist_id, &filename, report)
        .await
        .context("Unable to update gist")?;

    println!(
        "{}",
        format!("Gist updated successfully ({})", filename).green()
    );
    Ok(())
}

/// First filename in the gist's file set; files live in an ordered map, so
/// "first" is filename order and stable across runs
fn first_filename(gist: &Gist) -> Option<&str> {
    gist.files.keys().next().map(String::as_str)
}
