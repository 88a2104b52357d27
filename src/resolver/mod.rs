//! Custom domain -> account resolution with a read-through cache.

mod key;

pub use key::{lookup_key, normalize_host, LookupKey};

use crate::db::{domain_cache, Database};
use crate::errors::ServerError;
use crate::origin::AccountDirectory;

/// Key-value store holding hostname -> account id with an expiry.
pub trait DomainCache {
    fn get(&self, hostname: &str, now: i64) -> Result<Option<String>, ServerError>;
    fn put(
        &self,
        hostname: &str,
        account_id: &str,
        now: i64,
        expires_at: i64,
    ) -> Result<(), ServerError>;
}

/// [`DomainCache`] backed by the `domain_mappings` table.
#[derive(Debug, Clone)]
pub struct SqliteDomainCache {
    db: Database,
}

impl SqliteDomainCache {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn purge_expired(&self, now: i64) -> Result<usize, ServerError> {
        self.db
            .with_conn(|conn| domain_cache::purge_expired(conn, now))
    }
}

impl DomainCache for SqliteDomainCache {
    fn get(&self, hostname: &str, now: i64) -> Result<Option<String>, ServerError> {
        self.db
            .with_conn(|conn| domain_cache::get_account_id(conn, hostname, now))
    }

    fn put(
        &self,
        hostname: &str,
        account_id: &str,
        now: i64,
        expires_at: i64,
    ) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            domain_cache::put_account_id(conn, hostname, account_id, now, expires_at)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Cache,
    Origin,
}

/// The `(accountId, hostname)` pair handed to downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDomain {
    pub account_id: String,
    pub hostname: String,
    pub source: ResolutionSource,
}

pub struct DomainResolver<'a, C: ?Sized, D: ?Sized> {
    cache: &'a C,
    directory: &'a D,
    ttl_secs: i64,
}

impl<'a, C, D> DomainResolver<'a, C, D>
where
    C: DomainCache + ?Sized,
    D: AccountDirectory + ?Sized,
{
    pub fn new(cache: &'a C, directory: &'a D, ttl_secs: i64) -> Self {
        Self {
            cache,
            directory,
            ttl_secs,
        }
    }

    /// Cache first, then one origin call. A mapping is only cached after
    /// the origin confirmed it. Nothing is retried.
    pub fn resolve(&self, hostname: &str, now: i64) -> Result<ResolvedDomain, ServerError> {
        match self.cache.get(hostname, now) {
            Ok(Some(account_id)) => {
                tracing::debug!(hostname, account_id = %account_id, "domain resolved from cache");
                return Ok(ResolvedDomain {
                    account_id,
                    hostname: hostname.to_string(),
                    source: ResolutionSource::Cache,
                });
            }
            Ok(None) => {}
            // An unreadable cache degrades to an origin call.
            Err(e) => tracing::warn!(hostname, error = %e, "domain cache read failed"),
        }

        let account_id = self.directory.lookup_account_id(hostname)?;

        let expires_at = now + self.ttl_secs;
        if let Err(e) = self.cache.put(hostname, &account_id, now, expires_at) {
            tracing::warn!(hostname, error = %e, "domain cache write failed");
        }

        tracing::info!(hostname, account_id = %account_id, "domain resolved from origin");
        Ok(ResolvedDomain {
            account_id,
            hostname: hostname.to_string(),
            source: ResolutionSource::Origin,
        })
    }
}
