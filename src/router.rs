use crate::app::{now_unix, App};
use crate::errors::ServerError;
use crate::listings::page_sessions::new_page_id;
use crate::listings::{Event, FilterController, FilterState, ListingSession, Outcome};
use crate::resolver::{lookup_key, DomainResolver, LookupKey};
use crate::responses::{error_to_response, html_response, no_content, text_response, ResultResp};
use crate::templates::{self, ProfileVm};
use astra::{Request, Response};
use std::time::Instant;

const LISTINGS_PREFIX: &str = "/_listings/";

/// Route a request and turn any error into its response. Logs one line
/// per request.
pub fn serve(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = handle(req, app).unwrap_or_else(error_to_response);

    tracing::info!(
        %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "request"
    );
    resp
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/_health") => Ok(text_response(200, "ok")),
        ("GET", p) if p.starts_with(LISTINGS_PREFIX) => listings_fragment(&req, app),
        ("GET", _) => profile(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

fn request_host(req: &Request) -> Option<&str> {
    req.headers()
        .get("Host")
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().host())
}

/// `GET /` (domain routing) or `GET /{domain}` (path routing).
fn profile(req: &Request, app: &App) -> ResultResp {
    let path = req.uri().path();
    let host = request_host(req);

    let LookupKey::Domain(hostname) = lookup_key(app.config.use_domain_routing, host, path)
    else {
        return Err(ServerError::NotFound);
    };
    if !app.config.use_domain_routing && !is_profile_path(path) {
        return Err(ServerError::NotFound);
    }

    let resolved = DomainResolver::new(
        &app.cache,
        app.origin.as_ref(),
        app.config.domain_cache_ttl_secs,
    )
    .resolve(&hostname, now_unix())?;

    let agent = app
        .origin
        .fetch_agent(&resolved.account_id)?
        .ok_or(ServerError::AccountNotFound)?;

    // First render: tab "all", no search, no filters. The result becomes
    // the page's initial snapshot.
    let mut session = ListingSession::new(
        app.origin.as_ref(),
        agent.slug.as_str(),
        FilterController::new(None),
    );
    session.dispatch(Event::Reload);

    let page_id = new_page_id();
    let results = templates::listing_results(
        &agent.slug,
        Some(&page_id),
        session.state(),
        session.view(),
    );
    let state = session.state().clone();
    app.pages
        .open(&page_id, &agent.slug, session.into_controller(), Instant::now())?;

    let page_url = app.public_url(&resolved.hostname, host);
    html_response(templates::profile_page(&ProfileVm {
        agent: &agent,
        page_url: &page_url,
        website_url: &app.config.website_url,
        state: &state,
        page_id: &page_id,
        results,
    }))
}

/// Path routing serves the profile at `/{domain}` only.
fn is_profile_path(path: &str) -> bool {
    let mut segments = path.trim_start_matches('/').trim_end_matches('/').split('/');
    segments.next().is_some() && segments.next().is_none()
}

/// `GET /_listings/{slug}?pid=..&tab=..&page=..&keyword=..&<filters>`: the
/// `#listing-results` fragment for htmx swaps.
///
/// With a live `pid` the request advances that page's controller. Without
/// one the state is rebuilt from the query and fetched once.
fn listings_fragment(req: &Request, app: &App) -> ResultResp {
    let slug = &req.uri().path()[LISTINGS_PREFIX.len()..];
    if !is_valid_slug(slug) {
        return Err(ServerError::NotFound);
    }

    let query = req.uri().query().unwrap_or("");
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let state = FilterState::from_query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

    let page_id = pairs
        .iter()
        .find(|(k, _)| k == "pid")
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty());

    if let Some(pid) = page_id {
        let outcome = app.pages.advance(
            app.origin.as_ref(),
            slug,
            pid,
            state.clone(),
            Instant::now(),
            |state, view| templates::listing_results(slug, Some(pid), state, view),
        )?;
        match outcome {
            Outcome::Rendered(markup) => return html_response(markup),
            Outcome::Dropped => return Ok(no_content()),
            Outcome::Unknown => {
                tracing::debug!(slug, page_id = pid, "page session gone, rendering from query");
            }
        }
    }

    let mut session = ListingSession::new(
        app.origin.as_ref(),
        slug,
        FilterController::restore(state, None),
    );
    session.dispatch(Event::Reload);

    html_response(templates::listing_results(slug, None, session.state(), session.view()))
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
