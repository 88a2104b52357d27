// src/origin/client.rs
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{AgentProfile, DomainLookupResponse, ListingPage};
use super::{AccountDirectory, AgentDirectory, ListingSource};
use crate::errors::ServerError;
use crate::listings::filters::{SearchBody, Tab};

const USER_AGENT: &str = concat!("agent-sites/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the origin listings API.
///
/// No retries and no timeout beyond the transport default: a failed call
/// fails the request that made it.
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ServerError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ServerError::Lookup(format!("invalid API base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ServerError::Lookup(format!(
                "API base URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ServerError::Lookup(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ServerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServerError::InternalError)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, ServerError> {
        resp.json()
            .map_err(|e| ServerError::Lookup(format!("{what}: invalid response body: {e}")))
    }
}

impl AccountDirectory for ApiClient {
    fn lookup_account_id(&self, domain: &str) -> Result<String, ServerError> {
        let url = self.endpoint(&["agent", "infrastructure", "account", "domain"])?;

        let resp = self
            .client
            .get(url)
            .query(&[("domain", domain)])
            .send()
            .map_err(|e| ServerError::Lookup(format!("domain lookup: {e}")))?;

        if !resp.status().is_success() {
            tracing::info!(domain, status = %resp.status(), "origin does not know domain");
            return Err(ServerError::DomainNotConfigured);
        }

        let body: DomainLookupResponse = Self::decode(resp, "domain lookup")?;
        if body.account_id.trim().is_empty() {
            return Err(ServerError::Lookup("domain lookup: empty accountId".into()));
        }
        Ok(body.account_id)
    }
}

impl AgentDirectory for ApiClient {
    fn fetch_agent(&self, account_id: &str) -> Result<Option<AgentProfile>, ServerError> {
        let url = self.endpoint(&["v1", "account", account_id])?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ServerError::Lookup(format!("agent fetch: {e}")))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Self::decode(resp, "agent fetch").map(Some),
            status => Err(ServerError::Lookup(format!("agent fetch: HTTP {status}"))),
        }
    }
}

impl ListingSource for ApiClient {
    fn search_listings(
        &self,
        slug: &str,
        tab: Tab,
        page: u32,
        body: &SearchBody,
    ) -> Result<ListingPage, ServerError> {
        let url = self.endpoint(&["v1", "account", slug, "listing", tab.as_str()])?;

        let resp = self
            .client
            .post(url)
            .query(&[("page", page)])
            .json(body)
            .send()
            .map_err(|e| ServerError::Lookup(format!("listing search: {e}")))?;

        if !resp.status().is_success() {
            return Err(ServerError::Lookup(format!(
                "listing search: HTTP {}",
                resp.status()
            )));
        }

        Self::decode(resp, "listing search")
    }
}
