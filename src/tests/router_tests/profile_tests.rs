// src/tests/router_tests/profile_tests.rs
use crate::app::now_unix;
use crate::errors::ServerError;
use crate::listings::Tab;
use crate::resolver::DomainCache;
use crate::router::{handle, serve};
use crate::tests::utils::{get, read_body, test_app, FakeOrigin};
use scraper::{Html, Selector};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn select_text(doc: &Html, selector: &str) -> Vec<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn cached_host_skips_the_origin_lookup() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);
    let now = now_unix();
    app.cache
        .put("jane.example.com", "acc-1", now, now + 3600)
        .unwrap();

    let resp = handle(get("/", Some("jane.example.com")), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(origin.lookup_count(), 0);
}

#[test]
fn uncached_host_is_looked_up_once_then_served_from_cache() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let first = handle(get("/", Some("jane.example.com")), &app).unwrap();
    assert_eq!(first.status(), 200);
    assert_eq!(origin.lookup_count(), 1);

    let second = handle(get("/", Some("Jane.Example.com:443")), &app).unwrap();
    assert_eq!(second.status(), 200);
    assert_eq!(origin.lookup_count(), 1);

    let cached = app.cache.get("jane.example.com", now_unix()).unwrap();
    assert_eq!(cached.as_deref(), Some("acc-1"));
}

#[test]
fn expired_mapping_is_looked_up_again() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);
    let now = now_unix();
    app.cache
        .put("jane.example.com", "acc-1", now - 7200, now - 3600)
        .unwrap();

    let resp = handle(get("/", Some("jane.example.com")), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(origin.lookup_count(), 1);
}

#[test]
fn unknown_domain_is_404_and_not_cached() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let resp = serve(get("/", Some("nobody.example.com")), &app);

    assert_eq!(resp.status(), 404);
    assert_eq!(read_body(resp), "Domain not configured");
    assert_eq!(
        app.cache.get("nobody.example.com", now_unix()).unwrap(),
        None
    );
}

#[test]
fn origin_failure_is_500_and_not_cached() {
    let origin = Arc::new(FakeOrigin::standard());
    origin.fail_lookup.store(true, Ordering::SeqCst);
    let app = test_app(origin.clone(), true);

    let resp = serve(get("/", Some("jane.example.com")), &app);

    assert_eq!(resp.status(), 500);
    assert_eq!(read_body(resp), "Internal Server Error");
    assert_eq!(app.cache.get("jane.example.com", now_unix()).unwrap(), None);
}

#[test]
fn domain_routing_passes_other_paths_through() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let err = handle(get("/about", Some("jane.example.com")), &app).err().unwrap();

    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(origin.lookup_count(), 0);
}

#[test]
fn path_routing_uses_first_segment() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), false);

    let resp = handle(get("/jane.example.com", Some("localhost:3000")), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(origin.lookup_count(), 1);
    let body = read_body(resp);
    assert!(body.contains("http%3A%2F%2Flocalhost%3A3000%2Fjane.example.com"));
}

#[test]
fn path_routing_ignores_internal_and_dotless_segments() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), false);

    for path in ["/", "/favicon", "/_internal.thing", "/jane.example.com/extra"] {
        let err = handle(get(path, Some("localhost:3000")), &app).err().unwrap();
        assert!(matches!(err, ServerError::NotFound), "{path}");
    }
    assert_eq!(origin.lookup_count(), 0);
}

#[test]
fn unknown_agent_renders_not_found_page() {
    let origin = Arc::new(FakeOrigin::standard().with_domain("ghost.example.com", "acc-404"));
    let app = test_app(origin, true);

    let resp = serve(get("/", Some("ghost.example.com")), &app);

    assert_eq!(resp.status(), 404);
    let doc = Html::parse_document(&read_body(resp));
    assert_eq!(select_text(&doc, "h1"), vec!["Agent not found"]);
}

#[test]
fn profile_renders_agent_and_first_page() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let resp = handle(get("/", Some("jane.example.com")), &app).unwrap();
    let doc = Html::parse_document(&read_body(resp));

    assert_eq!(select_text(&doc, ".hero h1"), vec!["Jane Doe"]);
    assert_eq!(select_text(&doc, "#listing-results .listing-card h3").len(), 2);
    assert_eq!(
        select_text(&doc, "#listing-results .result-count"),
        vec!["Showing 2 of 2 listings"]
    );

    let form = Selector::parse("form#listing-controls").unwrap();
    let form = doc.select(&form).next().unwrap();
    assert_eq!(form.value().attr("hx-get"), Some("/_listings/jane-doe"));
    assert_eq!(form.value().attr("hx-sync"), Some("this:drop"));
    assert!(form
        .value()
        .attr("hx-trigger")
        .unwrap()
        .contains("delay:600ms"));

    let checked = Selector::parse("input.tab-input[checked]").unwrap();
    let tabs: Vec<_> = doc
        .select(&checked)
        .filter_map(|el| el.value().attr("value"))
        .collect();
    assert_eq!(tabs, vec!["all"]);

    let calls = origin.search_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].slug, "jane-doe");
    assert_eq!(calls[0].tab, Tab::All);
    assert_eq!(calls[0].page, 1);
}

#[test]
fn failed_first_page_still_renders_profile() {
    let origin = Arc::new(FakeOrigin::standard());
    origin.fail_search.store(true, Ordering::SeqCst);
    let app = test_app(origin, true);

    let resp = handle(get("/", Some("jane.example.com")), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let doc = Html::parse_document(&read_body(resp));
    assert_eq!(select_text(&doc, ".hero h1"), vec!["Jane Doe"]);
    assert_eq!(select_text(&doc, "#listing-results .error-state button"), vec!["Refresh"]);
}
