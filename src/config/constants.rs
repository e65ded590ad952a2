pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_COURSERA_TOKEN_URL: &str = "https://api.coursera.com/oauth2/client_credentials/token";
pub const DEFAULT_COURSERA_API_BASE_URL: &str = "https://api.coursera.org";
pub const DEFAULT_COURSERA_SITE_URL: &str = "https://www.coursera.org";
pub const DEFAULT_COURSE_LIMIT: u32 = 5;
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 500;

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const COURSERA_APP_KEY_VAR: &str = "COURSERA_APP_KEY";
pub const COURSERA_APP_SECRET_VAR: &str = "COURSERA_APP_SECRET";
