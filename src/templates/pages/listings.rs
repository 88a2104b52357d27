// templates/pages/listings.rs
use maud::{html, Markup};

use crate::listings::{FilterState, ListingView};
use crate::templates::components::{empty_state, error_state, listing_card, loading_state};

/// URL of the listing fragment for `state`. `page_id` ties the request to
/// the page session it came from.
pub fn results_url(slug: &str, page_id: Option<&str>, state: &FilterState) -> String {
    match page_id {
        Some(pid) => {
            let pid = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("pid", pid)
                .finish();
            format!("/_listings/{slug}?{pid}&{}", state.to_query())
        }
        None => format!("/_listings/{slug}?{}", state.to_query()),
    }
}

/// The `#listing-results` block. Returned on its own for htmx swaps and
/// embedded in the profile page on first render.
pub fn listing_results(
    slug: &str,
    page_id: Option<&str>,
    state: &FilterState,
    view: ListingView<'_>,
) -> Markup {
    html! {
        div id="listing-results" aria-live="polite" {
            @match view {
                ListingView::Loading => (loading_state()),
                ListingView::Empty => (empty_state(!state.is_initial())),
                ListingView::Error(_) => (error_state(&results_url(slug, page_id, state))),
                ListingView::Listings { items, total_count, page, page_count } => {
                    p class="result-count muted" {
                        "Showing " (items.len()) " of " (total_count) " listings"
                    }
                    div class="listing-grid" {
                        @for listing in items {
                            (listing_card(listing))
                        }
                    }
                    @if page_count > 1 {
                        (pager(slug, page_id, state, page, page_count))
                    }
                }
            }
        }
    }
}

fn pager(slug: &str, page_id: Option<&str>, state: &FilterState, page: u32, page_count: u32) -> Markup {
    let first = page.saturating_sub(2).max(1);
    let last = page.saturating_add(2).min(page_count);
    let link = |n: u32, label: &str| page_link(&results_url(slug, page_id, &state.with_page(n)), label);

    html! {
        nav class="pager" aria-label="Listing pages" {
            @if page > 1 {
                (link(page - 1, "‹ Prev"))
            }
            @for n in first..=last {
                @if n == page {
                    span class="current" aria-current="page" { (n) }
                } @else {
                    (link(n, &n.to_string()))
                }
            }
            @if page < page_count {
                (link(page.saturating_add(1), "Next ›"))
            }
        }
    }
}

fn page_link(url: &str, label: &str) -> Markup {
    html! {
        a
            href="#listings"
            hx-get=(url)
            hx-target="#listing-results"
            hx-swap="outerHTML"
            hx-sync="#listing-controls:drop"
        {
            (label)
        }
    }
}
