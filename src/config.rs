//! Server configuration

use std::net::SocketAddr;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file (env: DATABASE_PATH)
    pub database_path: String,
    /// Listen address (env: BIND_ADDR)
    pub bind_addr: SocketAddr,
    /// astra worker threads (env: MAX_WORKERS)
    pub max_workers: usize,
    /// Rows per list page (env: PAGE_SIZE)
    pub page_size: usize,
    /// Where anonymous visitors are sent (env: SIGN_IN_URL)
    pub sign_in_url: String,
    /// Shared secret for the public lead intake endpoint (env: LEAD_API_KEY).
    /// Intake is disabled when unset.
    pub lead_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "catalog_admin.sqlite3".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            page_size: 10,
            sign_in_url: "/sign-in".to_string(),
            lead_api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, BoxError> {
        let defaults = Config::default();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("BIND_ADDR {raw:?} is not a socket address: {e}"))?,
            Err(_) => defaults.bind_addr,
        };

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            bind_addr,
            max_workers: std::env::var("MAX_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_workers),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.page_size),
            sign_in_url: std::env::var("SIGN_IN_URL").unwrap_or(defaults.sign_in_url),
            lead_api_key: std::env::var("LEAD_API_KEY").ok().filter(|s| !s.is_empty()),
        })
    }
}
