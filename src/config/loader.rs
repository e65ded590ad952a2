use anyhow::{Context, Result};
use dirs::home_dir;
use std::path::{Path, PathBuf};

use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::validation::validate;
use super::Config;

impl Config {
    /// Per-user env file consulted after the working directory's `.env`.
    pub fn env_file_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".learnpath/env");
        Ok(path)
    }

    /// Loads env files into the process environment, then reads the configuration from it.
    pub fn load() -> Result<Self> {
        Self::load_env_files()?;
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        let builder = apply_env_overrides(ConfigBuilder::new())?;
        let config = builder.build()?;
        validate(&config)?;
        Ok(config)
    }

    fn load_env_files() -> Result<()> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("Failed parsing .env file"),
        }

        if let Ok(path) = Self::env_file_path() {
            load_env_file(&path)?;
        }

        Ok(())
    }
}

/// Loads `path` without overriding variables that are already set.
/// Returns `false` when the file does not exist.
pub(super) fn load_env_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(path)
        .with_context(|| format!("Failed parsing environment file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded environment file");
    Ok(true)
}
