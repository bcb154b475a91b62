//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Largest page size accepted by the Strava activities endpoint.
pub const MAX_PER_PAGE: u32 = 200;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Strava API base URL
    pub strava_api_base: String,
    /// Directory holding the cached report
    pub cache_dir: PathBuf,
    /// Page size used when fetching activities
    pub activities_per_page: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            strava_api_base: "http://127.0.0.1:9".to_string(),
            cache_dir: PathBuf::from(".stats-cache-test"),
            activities_per_page: 100,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let activities_per_page = match env::var("ACTIVITIES_PER_PAGE") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(n) if (1..=MAX_PER_PAGE).contains(&n) => n,
                _ => return Err(ConfigError::Invalid("ACTIVITIES_PER_PAGE", raw)),
            },
            Err(_) => 100,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port,
            strava_api_base: env::var("STRAVA_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://www.strava.com/api/v3".to_string()),
            cache_dir: env::var("STATS_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".stats-cache")),
            activities_per_page,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
