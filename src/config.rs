//! Configuration for the file-backed store and the HTTP origin lookup.

use std::path::PathBuf;

/// Key the location collection is stored under.
pub const DEFAULT_STORE_KEY: &str = "myMapLocations";

pub const ENV_DATA_DIR: &str = "LOCATION_PLANNER_DATA_DIR";
pub const ENV_STORE_KEY: &str = "LOCATION_PLANNER_KEY";
pub const ENV_ORIGIN_URL: &str = "LOCATION_PLANNER_ORIGIN_URL";
pub const ENV_ORIGIN_TIMEOUT_SECS: &str = "LOCATION_PLANNER_ORIGIN_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Directory holding one file per key (file-backed store only).
    pub data_dir: PathBuf,
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("location-data"),
            key: DEFAULT_STORE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from defaults overridden by `lookup(name)`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|value| !value.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup(ENV_STORE_KEY).filter(|value| !value.is_empty()) {
            config.key = key;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OriginConfig {
    /// JSON endpoint answering with the caller's approximate position.
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ipapi.co/json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OriginConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from defaults overridden by `lookup(name)`.
    ///
    /// An unparsable timeout keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENV_ORIGIN_URL).filter(|value| !value.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = lookup(ENV_ORIGIN_TIMEOUT_SECS).and_then(|value| value.trim().parse().ok()) {
            config.timeout_secs = timeout;
        }
        config
    }
}
