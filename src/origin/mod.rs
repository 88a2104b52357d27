//! Remote listings API: the source of truth for domains, agents and listings.

mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{AgentProfile, Listing, ListingPage, Pagination};

use crate::errors::ServerError;
use crate::listings::filters::{SearchBody, Tab};

/// Maps a custom domain to the account that owns it.
pub trait AccountDirectory {
    /// `DomainNotConfigured` when the origin does not know the domain,
    /// `Lookup` on transport or decoding failure.
    fn lookup_account_id(&self, domain: &str) -> Result<String, ServerError>;
}

pub trait AgentDirectory {
    /// `Ok(None)` when the account does not exist.
    fn fetch_agent(&self, account_id: &str) -> Result<Option<AgentProfile>, ServerError>;
}

pub trait ListingSource {
    fn search_listings(
        &self,
        slug: &str,
        tab: Tab,
        page: u32,
        body: &SearchBody,
    ) -> Result<ListingPage, ServerError>;
}

/// Everything the web handlers need from the origin.
pub trait Origin: AccountDirectory + AgentDirectory + ListingSource + Send + Sync {}

impl<T> Origin for T where T: AccountDirectory + AgentDirectory + ListingSource + Send + Sync {}
