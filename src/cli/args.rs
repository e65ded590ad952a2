use anyhow::Result;
use clap::Parser;

use super::commands;

/// Entry point for the `learnpath` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "learnpath",
    about = "Personalized tech learning paths with matching Coursera courses",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging of API calls (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Override the Gemini model for this run
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Disable the animated progress indicator
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
