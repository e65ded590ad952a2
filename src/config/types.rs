use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub catalog: CatalogSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub app_key: String,
    pub app_secret: String,
    pub token_url: String,
    pub api_base_url: String,
    pub site_url: String,
    pub course_limit: u32,
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub progress_interval_ms: u64,
    pub show_progress: bool,
}

impl SessionSettings {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }
}
