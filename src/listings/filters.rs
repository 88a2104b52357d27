// src/listings/filters.rs
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    All,
    Sale,
    Rent,
    Auction,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::All, Tab::Sale, Tab::Rent, Tab::Auction];

    /// Path segment used by the listing search endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Sale => "sale",
            Tab::Rent => "rent",
            Tab::Auction => "auction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Sale => "For Sale",
            Tab::Rent => "For Rent",
            Tab::Auction => "Auction",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            "sale" => Ok(Tab::Sale),
            "rent" => Ok(Tab::Rent),
            "auction" => Ok(Tab::Auction),
            other => Err(ServerError::BadRequest(format!("unknown tab {other:?}"))),
        }
    }
}

/// Structured listing filters. An unset bound or an empty set means
/// "no constraint" and never reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub types: BTreeSet<String>,
    pub bed_rooms: BTreeSet<String>,
    pub bath_rooms: BTreeSet<String>,
    pub tenures: BTreeSet<String>,
    pub floor_levels: BTreeSet<String>,
    pub furnishings: BTreeSet<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.types.is_empty()
            && self.bed_rooms.is_empty()
            && self.bath_rooms.is_empty()
            && self.tenures.is_empty()
            && self.floor_levels.is_empty()
            && self.furnishings.is_empty()
    }

    /// Number of active constraints, shown on the filter toggle.
    pub fn active_count(&self) -> usize {
        [self.min_price.is_some(), self.max_price.is_some()]
            .iter()
            .filter(|set| **set)
            .count()
            + self.code_sets().iter().filter(|(_, set)| !set.is_empty()).count()
    }

    /// The code sets paired with their wire/query names.
    pub fn code_sets(&self) -> [(&'static str, &BTreeSet<String>); 6] {
        [
            ("types", &self.types),
            ("bedRooms", &self.bed_rooms),
            ("bathRooms", &self.bath_rooms),
            ("tenures", &self.tenures),
            ("floorLevels", &self.floor_levels),
            ("furnishings", &self.furnishings),
        ]
    }

    fn code_set_mut(&mut self, key: &str) -> Option<&mut BTreeSet<String>> {
        match key {
            "types" => Some(&mut self.types),
            "bedRooms" => Some(&mut self.bed_rooms),
            "bathRooms" => Some(&mut self.bath_rooms),
            "tenures" => Some(&mut self.tenures),
            "floorLevels" => Some(&mut self.floor_levels),
            "furnishings" => Some(&mut self.furnishings),
            _ => None,
        }
    }
}

/// JSON body of `POST /v1/account/{slug}/listing/{tab}`.
///
/// `types` is always present (`[]` when unfiltered); every other category
/// is omitted when empty. The origin API treats the two cases differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bed_rooms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bath_rooms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tenures: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub floor_levels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub furnishings: Vec<String>,
}

impl SearchBody {
    pub fn new(keyword: &str, filters: &Filters) -> Self {
        let list = |set: &BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>();
        Self {
            keyword: keyword.trim().to_string(),
            min_price: filters.min_price,
            max_price: filters.max_price,
            types: list(&filters.types),
            bed_rooms: list(&filters.bed_rooms),
            bath_rooms: list(&filters.bath_rooms),
            tenures: list(&filters.tenures),
            floor_levels: list(&filters.floor_levels),
            furnishings: list(&filters.furnishings),
        }
    }
}

/// Highest page a visitor can ask for.
pub const MAX_PAGE: u32 = 10_000;

/// Everything the visitor has chosen on one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub tab: Tab,
    pub page: u32,
    pub keyword: String,
    pub filters: Filters,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            tab: Tab::All,
            page: 1,
            keyword: String::new(),
            filters: Filters::default(),
        }
    }
}

impl FilterState {
    /// True for the combination the page was first rendered with.
    pub fn is_initial(&self) -> bool {
        self.tab == Tab::All
            && self.page == 1
            && self.keyword.trim().is_empty()
            && self.filters.is_empty()
    }

    pub fn search_body(&self) -> SearchBody {
        SearchBody::new(&self.keyword, &self.filters)
    }

    /// Rebuild state from query pairs (`tab`, `page`, `keyword`, `minPrice`,
    /// `maxPrice` and repeated keys for each code set).
    ///
    /// Malformed pages and prices fall back to their defaults and pages are
    /// capped at [`MAX_PAGE`]; an unknown tab is rejected.
    pub fn from_query<'a, I>(pairs: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut state = Self::default();

        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "tab" if !value.is_empty() => state.tab = value.parse()?,
                "page" => {
                    state.page = value
                        .parse()
                        .ok()
                        .filter(|p: &u32| *p > 0)
                        .map_or(1, |p| p.min(MAX_PAGE));
                }
                "keyword" => state.keyword = value.to_string(),
                "minPrice" => state.filters.min_price = parse_price(value),
                "maxPrice" => state.filters.max_price = parse_price(value),
                other => {
                    if let Some(set) = state.filters.code_set_mut(other) {
                        if !value.is_empty() {
                            set.insert(value.to_string());
                        }
                    }
                }
            }
        }

        Ok(state)
    }

    /// Inverse of [`FilterState::from_query`]. Defaults are left out.
    pub fn to_query(&self) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        out.append_pair("tab", self.tab.as_str());
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }
        if !self.keyword.trim().is_empty() {
            out.append_pair("keyword", self.keyword.trim());
        }
        if let Some(min) = self.filters.min_price {
            out.append_pair("minPrice", &min.to_string());
        }
        if let Some(max) = self.filters.max_price {
            out.append_pair("maxPrice", &max.to_string());
        }
        for (key, set) in self.filters.code_sets() {
            for code in set {
                out.append_pair(key, code);
            }
        }
        out.finish()
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

fn parse_price(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| !matches!(*c, ',' | ' ')).collect();
    digits.parse().ok()
}
