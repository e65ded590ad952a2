use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;
use super::constants::{COURSERA_APP_KEY_VAR, COURSERA_APP_SECRET_VAR, GEMINI_API_KEY_VAR};

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string(GEMINI_API_KEY_VAR)? {
        builder = builder.with_llm(|llm| llm.api_key = api_key.trim().to_string());
    }

    if let Some(app_key) = env_string(COURSERA_APP_KEY_VAR)? {
        builder = builder.with_catalog(|catalog| catalog.app_key = app_key.trim().to_string());
    }

    if let Some(app_secret) = env_string(COURSERA_APP_SECRET_VAR)? {
        builder =
            builder.with_catalog(|catalog| catalog.app_secret = app_secret.trim().to_string());
    }

    if let Some(model) = env_string("LEARNPATH_MODEL")? {
        builder = builder.with_llm(|llm| llm.model = model);
    }

    if let Some(base_url) = env_string("LEARNPATH_GEMINI_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url);
    }

    if let Some(timeout) = env_u64("LEARNPATH_TIMEOUT_SECS")? {
        builder = builder
            .with_llm(|llm| llm.timeout_secs = Some(timeout))
            .with_catalog(|catalog| catalog.timeout_secs = Some(timeout));
    }

    if let Some(token_url) = env_string("COURSERA_TOKEN_URL")? {
        builder = builder.with_catalog(|catalog| catalog.token_url = token_url);
    }

    if let Some(api_base_url) = env_string("COURSERA_API_BASE_URL")? {
        builder = builder.with_catalog(|catalog| catalog.api_base_url = api_base_url);
    }

    if let Some(site_url) = env_string("COURSERA_SITE_URL")? {
        builder = builder.with_catalog(|catalog| catalog.site_url = site_url);
    }

    if let Some(limit) = env_u32("LEARNPATH_COURSE_LIMIT")? {
        builder = builder.with_catalog(|catalog| catalog.course_limit = limit);
    }

    if let Some(interval) = env_u64("LEARNPATH_PROGRESS_INTERVAL_MS")? {
        builder = builder.with_session(|session| session.progress_interval_ms = interval);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
