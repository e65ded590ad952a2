use anyhow::{Result, anyhow};

use super::constants::{COURSERA_APP_KEY_VAR, COURSERA_APP_SECRET_VAR, GEMINI_API_KEY_VAR};
use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(anyhow!(
            "Gemini API key not found. Please set the {GEMINI_API_KEY_VAR} environment variable."
        ));
    }

    if config.catalog.app_key.trim().is_empty() || config.catalog.app_secret.trim().is_empty() {
        return Err(anyhow!(
            "Coursera API credentials not found. Please set the {COURSERA_APP_KEY_VAR} and {COURSERA_APP_SECRET_VAR} environment variables."
        ));
    }

    if config.catalog.course_limit == 0 {
        return Err(anyhow!("Course limit must be greater than zero"));
    }

    if config.session.progress_interval_ms == 0 {
        return Err(anyhow!("Progress interval must be greater than zero"));
    }

    Ok(())
}
