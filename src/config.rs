// src/config.rs
use std::net::SocketAddr;

/// Default lifetime of a cached hostname -> account mapping.
pub const DOMAIN_CACHE_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Resolve accounts by request hostname (production) instead of the
    /// first path segment (dev/staging).
    pub use_domain_routing: bool,
    /// Origin listings API, without a trailing slash.
    pub api_base_url: String,
    /// Public marketing site, linked from the footer and used for
    /// share links in path-routed mode.
    pub website_url: String,
    pub bind_addr: SocketAddr,
    pub cache_db_path: String,
    pub max_workers: usize,
    pub domain_cache_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_domain_routing: false,
            api_base_url: "http://127.0.0.1:8080".to_string(),
            website_url: "http://127.0.0.1:3000".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache_db_path: "domain_cache.sqlite3".to_string(),
            max_workers: 8,
            domain_cache_ttl_secs: DOMAIN_CACHE_TTL_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut cfg = Self::default();

        if let Some(v) = read("USE_DOMAIN_ROUTING") {
            cfg.use_domain_routing = parse_flag(&v);
        }
        if let Some(v) = read("API_BASE_URL") {
            cfg.api_base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = read("WEBSITE_URL") {
            cfg.website_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = read("BIND_ADDR") {
            cfg.bind_addr = v.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: v.clone(),
            })?;
        }
        if let Some(v) = read("CACHE_DB_PATH") {
            cfg.cache_db_path = v;
        }
        if let Some(v) = read("MAX_WORKERS") {
            cfg.max_workers = v
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "MAX_WORKERS",
                    value: v.clone(),
                })?;
        }

        Ok(cfg)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
