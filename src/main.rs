mod advisor;
mod catalog;
mod cli;
mod config;
mod logging;
mod session;
mod topics;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.run().await
}
