// src/tests/router_tests/listings_tests.rs
use crate::errors::ServerError;
use crate::listings::filters::MAX_PAGE;
use crate::listings::Tab;
use crate::router::handle;
use crate::tests::utils::{get, read_body, test_app, FakeOrigin};
use scraper::{Html, Selector};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn fragment(origin: &Arc<FakeOrigin>, uri: &str) -> Html {
    let app = test_app(origin.clone(), true);
    let resp = handle(get(uri, Some("jane.example.com")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    Html::parse_fragment(&read_body(resp))
}

fn count(doc: &Html, selector: &str) -> usize {
    doc.select(&Selector::parse(selector).unwrap()).count()
}

#[test]
fn fragment_is_partial_html() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let resp = handle(get("/_listings/jane-doe", None), &app).unwrap();
    let body = read_body(resp);

    assert!(body.starts_with("<div id=\"listing-results\""));
    assert!(!body.contains("<!DOCTYPE"));
    assert_eq!(origin.lookup_count(), 0);
}

#[test]
fn empty_rent_tab_shows_empty_state_not_error() {
    let origin = Arc::new(FakeOrigin::standard());

    let doc = fragment(&origin, "/_listings/jane-doe?tab=rent");

    assert_eq!(count(&doc, ".empty-state"), 1);
    assert_eq!(count(&doc, ".error-state"), 0);
    assert_eq!(count(&doc, ".listing-card"), 0);

    let calls = origin.search_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tab, Tab::Rent);
}

#[test]
fn failing_search_shows_error_with_refresh() {
    let origin = Arc::new(FakeOrigin::standard());
    origin.fail_search.store(true, Ordering::SeqCst);

    let doc = fragment(&origin, "/_listings/jane-doe?tab=sale&keyword=lake");

    assert_eq!(count(&doc, ".error-state"), 1);
    let button = Selector::parse(".error-state button").unwrap();
    let button = doc.select(&button).next().unwrap();
    let refresh = button.value().attr("hx-get").unwrap();
    assert!(refresh.starts_with("/_listings/jane-doe?"));
    assert!(refresh.contains("tab=sale"));
    assert!(refresh.contains("keyword=lake"));
    assert_eq!(origin.search_calls().len(), 1);
}

#[test]
fn filters_become_the_search_payload() {
    let origin = Arc::new(FakeOrigin::standard());

    fragment(
        &origin,
        "/_listings/jane-doe?tab=sale&page=2&keyword=%20lake%20&minPrice=300%2C000&types=condo&types=terrace&bedRooms=3",
    );

    let calls = origin.search_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].tab, Tab::Sale);
    assert_eq!(calls[0].page, 2);
    assert_eq!(
        calls[0].body,
        json!({
            "keyword": "lake",
            "minPrice": 300000,
            "types": ["condo", "terrace"],
            "bedRooms": ["3"],
        })
    );
}

#[test]
fn cleared_types_still_send_an_empty_list() {
    let origin = Arc::new(FakeOrigin::standard());

    fragment(&origin, "/_listings/jane-doe?tab=sale&types=");

    let calls = origin.search_calls();
    assert_eq!(calls[0].body, json!({ "keyword": "", "types": [] }));
}

#[test]
fn huge_page_number_renders_a_capped_pager() {
    let origin = Arc::new(FakeOrigin::standard());

    let doc = fragment(&origin, "/_listings/jane-doe?tab=sale&page=4294967295");

    assert_eq!(origin.search_calls()[0].page, MAX_PAGE);
    let current = Selector::parse(".pager .current").unwrap();
    let current: Vec<String> = doc.select(&current).map(|el| el.text().collect()).collect();
    assert_eq!(current, vec![MAX_PAGE.to_string()]);
}

#[test]
fn bad_page_falls_back_to_first() {
    let origin = Arc::new(FakeOrigin::standard());

    fragment(&origin, "/_listings/jane-doe?page=zero");

    assert_eq!(origin.search_calls()[0].page, 1);
}

#[test]
fn unknown_tab_is_rejected_without_a_search() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let err = handle(get("/_listings/jane-doe?tab=lease", None), &app).err().unwrap();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(origin.search_calls().is_empty());
}

#[test]
fn malformed_slug_is_not_found() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let err = handle(get("/_listings/jane%20doe", None), &app).err().unwrap();

    assert!(matches!(err, ServerError::NotFound));
    assert!(origin.search_calls().is_empty());
}
