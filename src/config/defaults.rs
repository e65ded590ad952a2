use super::constants::*;
use super::types::{CatalogSettings, LlmSettings, SessionSettings};

pub fn default_user_agent() -> String {
    format!("learnpath/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            app_secret: String::new(),
            token_url: DEFAULT_COURSERA_TOKEN_URL.to_string(),
            api_base_url: DEFAULT_COURSERA_API_BASE_URL.to_string(),
            site_url: DEFAULT_COURSERA_SITE_URL.to_string(),
            course_limit: DEFAULT_COURSE_LIMIT,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            show_progress: true,
        }
    }
}
