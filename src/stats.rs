//! Language aggregation across repositories

use crate::config::Config;
use anyhow::Result;
use gistbar_github::{GitHubClient, OwnedRepo};
use std::collections::HashMap;

/// Aggregate per-language byte counts across the configured account's
/// repositories into a single tally
///
/// Lists one page of up to 100 owned repositories (most recently updated
/// first), drops excluded full names before any fetch, queries the remaining
/// language breakdowns concurrently, and folds the results after all of them
/// have resolved. A single failed fetch fails the whole aggregation.
pub async fn collect_language_totals(
    client: &GitHubClient,
    config: &Config,
) -> Result<HashMap<String, u64>> {
    let repos = client.list_owned_repos().await?;
    let included = filter_repositories(repos, &config.exclude_repos);

    let fetches: Vec<_> = included
        .iter()
        .map(|repo| repo_languages(client, &config.username, repo))
        .collect();
    let results = futures::future::join_all(fetches).await;

    let mut tallies = Vec::with_capacity(results.len());
    for result in results {
        tallies.push(result?);
    }

    Ok(merge_tallies(tallies))
}

/// Language breakdown for one repository; forks contribute nothing and are
/// never queried
async fn repo_languages(
    client: &GitHubClient,
    owner: &str,
    repo: &OwnedRepo,
) -> Result<HashMap<String, u64>> {
    if repo.fork {
        return Ok(HashMap::new());
    }
    client.list_languages(owner, &repo.name).await
}

/// Drop repositories whose full name is on the exclusion list
fn filter_repositories(repos: Vec<OwnedRepo>, exclude: &[String]) -> Vec<OwnedRepo> {
    repos
        .into_iter()
        .filter(|repo| !exclude.contains(&repo.full_name))
        .collect()
}

/// Fold per-repository tallies into one, creating entries on first sight
fn merge_tallies(tallies: Vec<HashMap<String, u64>>) -> HashMap<String, u64> {
    let mut total = HashMap::new();
    for tally in tallies {
        for (language, count) in tally {
            *total.entry(language).or_insert(0) += count;
        }
    }
    total
}
