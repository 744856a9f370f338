use anyhow::Result;
use clap::Parser;
use gistbar::commands::{Command, CommandContext, ReportCommand};
use gistbar::config::Config;

#[derive(Parser)]
#[command(name = "gistbar")]
#[command(about = "Publishes a language bar chart of your GitHub repositories to a gist")]
#[command(version)]
struct Cli {
    /// Compute and print the report without updating the gist
    #[arg(long)]
    dry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let context = CommandContext { config };

    ReportCommand { dry: cli.dry }.execute(&context).await
}
