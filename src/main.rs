use crate::app::{now_unix, App};
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::origin::ApiClient;
use crate::resolver::SqliteDomainCache;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod config;
mod db;
mod errors;
mod listings;
mod origin;
mod resolver;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "agent_sites=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.cache_db_path.clone());
    if let Err(e) = init_db(&db) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let cache = SqliteDomainCache::new(db);
    match cache.purge_expired(now_unix()) {
        Ok(0) => {}
        Ok(n) => tracing::info!(purged = n, "expired domain mappings removed"),
        Err(e) => tracing::warn!(error = %e, "could not purge expired domain mappings"),
    }

    let origin = match ApiClient::new(&config.api_base_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, api_base_url = %config.api_base_url, "bad API_BASE_URL");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    tracing::info!(
        %addr,
        domain_routing = config.use_domain_routing,
        api = %config.api_base_url,
        "starting server"
    );

    let app = App::new(config, cache, Box::new(origin));
    let result = Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| router::serve(req, &app));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
