use chrono::{DateTime, Utc};
use serde::Deserialize;

// GET /agent/infrastructure/account/domain?domain=...
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainLookupResponse {
    pub account_id: String,
}

/// Public profile of the agent behind an account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: String,
    /// Used in listing search URLs.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub agency_name: Option<String>,
    #[serde(default)]
    pub license_no: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    /// sale | rent | auction
    #[serde(default)]
    pub listing_type: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bed_rooms: Option<u32>,
    #[serde(default)]
    pub bath_rooms: Option<u32>,
    /// Built-up size in square feet.
    #[serde(default)]
    pub floor_size: Option<u32>,
    #[serde(default)]
    pub cover_photo_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_count: u64,
    pub page: u32,
    pub limit: u32,
}

/// One page of listing search results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub items: Vec<Listing>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}
