use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
/// How long transient notifications stay visible, in milliseconds.
pub const NOTIFICATION_LIFE_MS: u64 = 3000;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

pub fn get_rows_per_page() -> u32 {
    parse_rows_per_page(env::var("ROWS_PER_PAGE").ok().as_deref())
}

/// Parse a rows-per-page override. Missing, zero or malformed values fall back to the default.
pub fn parse_rows_per_page(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|rows| *rows > 0)
        .unwrap_or(DEFAULT_ROWS_PER_PAGE)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Connection settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub api_token: String,
    pub rows_per_page: u32,
}

impl Settings {
    pub fn from_env(env_file: Option<&str>) -> Self {
        load_env_file(env_file);
        Self {
            api_base_url: get_api_base_url(),
            api_token: get_api_token(),
            rows_per_page: get_rows_per_page(),
        }
    }
}
