use crate::config::AppConfig;
use crate::listings::PageSessions;
use crate::origin::Origin;
use crate::resolver::SqliteDomainCache;

/// Everything a request handler needs, shared across the worker pool.
/// Mutable state is limited to the SQLite domain cache and the open page
/// sessions.
pub struct App {
    pub config: AppConfig,
    pub cache: SqliteDomainCache,
    pub origin: Box<dyn Origin>,
    pub pages: PageSessions,
}

impl App {
    pub fn new(config: AppConfig, cache: SqliteDomainCache, origin: Box<dyn Origin>) -> Self {
        Self {
            config,
            cache,
            origin,
            pages: PageSessions::default(),
        }
    }

    /// Public URL a visitor would share for `hostname`.
    pub fn public_url(&self, hostname: &str, request_host: Option<&str>) -> String {
        if self.config.use_domain_routing {
            return format!("https://{hostname}");
        }
        match request_host {
            Some(host) => format!("http://{host}/{hostname}"),
            None => format!("{}/{hostname}", self.config.website_url),
        }
    }
}

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
