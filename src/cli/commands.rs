use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use crate::advisor::LearningPathAdvisor;
use crate::catalog::AuthenticatedCatalog;
use crate::config::{CatalogSettings, Config};
use crate::logging;
use crate::session::{Progress, Session};
use crate::topics::TopicCatalog;

use super::args::Cli;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    println!("{}", "Tech Learning Path Prompt System".bold());
    println!("--------------------------------");

    // Fatal startup problems are printed and still exit with status 0.
    let mut stdout = io::stdout();
    let Some(config) = settle_config(Config::load(), &cli, &mut stdout)? else {
        return Ok(());
    };

    let advisor = LearningPathAdvisor::gemini(&config.llm)?;
    let Some(catalog) = connect_catalog(&config.catalog, &mut stdout).await? else {
        return Ok(());
    };

    let topics = TopicCatalog::default();
    let progress = if config.session.show_progress {
        Progress::Spinner(config.session.progress_interval())
    } else {
        Progress::Hidden
    };

    let stdin = io::stdin();
    let mut session = Session::new(&topics, &catalog, &advisor, stdin.lock(), io::stdout())
        .with_progress(progress);
    session.run().await?;

    println!("{}", "Goodbye!".green());
    Ok(())
}

fn settle_config(loaded: Result<Config>, cli: &Cli, out: &mut impl Write) -> Result<Option<Config>> {
    match loaded {
        Ok(config) => Ok(Some(apply_overrides(config, cli))),
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), "configuration rejected");
            writeln!(out, "{}", err.to_string().red())?;
            Ok(None)
        }
    }
}

async fn connect_catalog(
    settings: &CatalogSettings,
    out: &mut impl Write,
) -> Result<Option<AuthenticatedCatalog>> {
    match AuthenticatedCatalog::connect(settings).await {
        Ok(catalog) => {
            tracing::debug!("Coursera access token obtained");
            Ok(Some(catalog))
        }
        Err(err) => {
            writeln!(out, "{}", err.to_string().red())?;
            Ok(None)
        }
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(model) = cli.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        config.llm.model = model.to_string();
    }
    if cli.no_progress {
        config.session.show_progress = false;
    }
    config
}
