use crate::app::App;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::listings::{SearchBody, Tab};
use crate::origin::{
    AccountDirectory, AgentDirectory, AgentProfile, Listing, ListingPage, ListingSource,
    Pagination,
};
use crate::resolver::SqliteDomainCache;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One recorded listing search: slug, tab, page and the JSON body sent.
#[derive(Debug, Clone)]
pub struct SearchCall {
    pub slug: String,
    pub tab: Tab,
    pub page: u32,
    pub body: serde_json::Value,
}

/// In-memory origin. Counts every call so tests can assert on traffic.
#[derive(Default)]
pub struct FakeOrigin {
    domains: HashMap<String, String>,
    agents: HashMap<String, AgentProfile>,
    pages: HashMap<Tab, ListingPage>,
    pub fail_lookup: AtomicBool,
    pub fail_search: AtomicBool,
    pub lookups: AtomicUsize,
    pub searches: Mutex<Vec<SearchCall>>,
}

impl FakeOrigin {
    /// `jane.example.com` -> `acc-1` -> agent `jane-doe`, with two sale
    /// listings and nothing for rent.
    pub fn standard() -> Self {
        let mut origin = Self::default();
        origin
            .domains
            .insert("jane.example.com".to_string(), "acc-1".to_string());
        origin.agents.insert("acc-1".to_string(), agent("acc-1", "jane-doe"));

        let sale = vec![listing("l-1", "Lakeside Condo", "sale"), listing("l-2", "Hilltop Terrace", "sale")];
        origin.pages.insert(Tab::All, page(sale.clone(), 2));
        origin.pages.insert(Tab::Sale, page(sale, 2));
        origin.pages.insert(Tab::Rent, page(Vec::new(), 0));
        origin
    }

    pub fn with_domain(mut self, domain: &str, account_id: &str) -> Self {
        self.domains.insert(domain.to_string(), account_id.to_string());
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> Vec<SearchCall> {
        self.searches.lock().unwrap().clone()
    }
}

impl AccountDirectory for Arc<FakeOrigin> {
    fn lookup_account_id(&self, domain: &str) -> Result<String, ServerError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(ServerError::Lookup("connection refused".to_string()));
        }
        self.domains
            .get(domain)
            .cloned()
            .ok_or(ServerError::DomainNotConfigured)
    }
}

impl AgentDirectory for Arc<FakeOrigin> {
    fn fetch_agent(&self, account_id: &str) -> Result<Option<AgentProfile>, ServerError> {
        Ok(self.agents.get(account_id).cloned())
    }
}

impl ListingSource for Arc<FakeOrigin> {
    fn search_listings(
        &self,
        slug: &str,
        tab: Tab,
        page: u32,
        body: &SearchBody,
    ) -> Result<ListingPage, ServerError> {
        self.searches.lock().unwrap().push(SearchCall {
            slug: slug.to_string(),
            tab,
            page,
            body: serde_json::to_value(body).unwrap(),
        });
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(ServerError::Lookup("listing search: 502".to_string()));
        }
        Ok(self.pages.get(&tab).cloned().unwrap_or(ListingPage {
            items: Vec::new(),
            pagination: None,
        }))
    }
}

pub fn agent(id: &str, slug: &str) -> AgentProfile {
    AgentProfile {
        id: id.to_string(),
        slug: slug.to_string(),
        name: "Jane Doe".to_string(),
        agency_name: Some("Harbour Realty".to_string()),
        license_no: Some("REN 12345".to_string()),
        phone: Some("+60 12-345 6789".to_string()),
        email: Some("jane@example.com".to_string()),
        photo_url: None,
        bio: Some("Ten years selling homes by the lake.".to_string()),
    }
}

pub fn listing(id: &str, title: &str, listing_type: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        address: Some("Jalan Tasik 1".to_string()),
        price: Some(650_000),
        currency: None,
        listing_type: Some(listing_type.to_string()),
        property_type: Some("condo".to_string()),
        bed_rooms: Some(3),
        bath_rooms: Some(2),
        floor_size: Some(1200),
        cover_photo_url: None,
        published_at: None,
    }
}

pub fn page(items: Vec<Listing>, total_count: u64) -> ListingPage {
    ListingPage {
        items,
        pagination: Some(Pagination {
            total_count,
            page: 1,
            limit: 12,
        }),
    }
}

/// Fresh SQLite file per call. Each test gets its own path, so the
/// thread-local connection never leaks rows between tests.
pub fn test_db() -> Database {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let path = std::env::temp_dir().join(format!(
        "agent_sites_test_{}_{}.sqlite",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_file(&path);
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn test_app(origin: Arc<FakeOrigin>, use_domain_routing: bool) -> App {
    let config = AppConfig {
        use_domain_routing,
        website_url: "https://agentsites.example".to_string(),
        ..AppConfig::default()
    };
    App::new(config, SqliteDomainCache::new(test_db()), Box::new(origin))
}

pub fn get(uri: &str, host: Option<&str>) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    if let Some(host) = host {
        req.headers_mut().insert("Host", host.parse().unwrap());
    }
    req
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
