//! GitHub API client library
//!
//! This library provides a thin authenticated interface over the GitHub REST
//! API, covering the operations the report pipeline consumes: repository
//! listing, per-repository language breakdowns, and gist updates.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`repositories`]: Owned-repository listing
//! - [`languages`]: Per-repository language byte counts
//! - [`gists`]: Gist retrieval and single-file updates

mod client;
mod gists;
mod languages;
mod repositories;

// Re-export public API
pub use client::GitHubClient;
pub use gists::{Gist, GistFile};
pub use repositories::OwnedRepo;
