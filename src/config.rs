use crate::banner::BannerOrdering;
use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_HIDE_SECS: u64 = 4;

/// Settings read from the environment. Unparseable values fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: Option<PathBuf>,
    pub api_url: String,
    pub status_hide_after: Duration,
    pub status_ordering: BannerOrdering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: None,
            api_url: DEFAULT_API_URL.to_string(),
            status_hide_after: Duration::from_secs(DEFAULT_HIDE_SECS),
            status_ordering: BannerOrdering::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Self {
            port: lookup("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            data_path: lookup("APP_DATA_PATH")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            api_url: lookup("ACTIVITY_API_URL")
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.api_url),
            status_hide_after: lookup("STATUS_HIDE_SECS")
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.status_hide_after),
            status_ordering: lookup("STATUS_ORDERING")
                .and_then(|value| BannerOrdering::parse(&value))
                .unwrap_or(defaults.status_ordering),
        }
    }
}
