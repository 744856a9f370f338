//! Report command implementation

use super::{Command, CommandContext};
use crate::{chart, gist, stats};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use gistbar_github::GitHubClient;

/// Compute the language report and publish it to the configured gist
pub struct ReportCommand {
    /// Compute and print the report without updating the gist
    pub dry: bool,
}

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = &context.config;
        let client = GitHubClient::new(Some(config.token.clone()));

        println!("{}", "Calculating language totals...".cyan());
        let tally = stats::collect_language_totals(&client, config).await?;
        println!(
            "{}",
            format!("Aggregated {} languages", tally.len()).green()
        );

        let rows = chart::chart_rows(&tally, &config.exclude_languages);
        let report = chart::render_lines(&rows).join("\n");

        println!("{}", "Generated report:".cyan());
        println!("{}", report);

        if !self.should_publish() {
            println!("{}", "Dry run, gist not updated".yellow());
            return Ok(());
        }

        println!("{}", "Updating gist...".cyan());
        gist::publish_report(&client, &config.gist_id, &report).await
    }
}

impl ReportCommand {
    /// The publish step runs only outside dry mode; everything before it is
    /// identical in both modes
    fn should_publish(&self) -> bool {
        !self.dry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_flag_skips_publish() {
        assert!(!ReportCommand { dry: true }.should_publish());
        assert!(ReportCommand { dry: false }.should_publish());
    }
}
