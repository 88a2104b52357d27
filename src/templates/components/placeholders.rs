use maud::{html, Markup};

pub fn loading_state() -> Markup {
    html! {
        div class="placeholder loading-state" role="status" { "Loading listings…" }
    }
}

pub fn empty_state(filtered: bool) -> Markup {
    html! {
        div class="placeholder empty-state" {
            h3 { "No listings found" }
            @if filtered {
                p class="muted" { "Try a different search or clear some filters." }
            } @else {
                p class="muted" { "Nothing listed here yet. Check back soon." }
            }
        }
    }
}

/// Shown when a listing fetch failed. `refresh_url` re-runs the same
/// search; nothing retries on its own.
pub fn error_state(refresh_url: &str) -> Markup {
    html! {
        div class="placeholder error-state" role="alert" {
            h3 { "We couldn't load these listings" }
            p class="muted" { "Please try again in a moment." }
            button
                type="button"
                class="btn"
                hx-get=(refresh_url)
                hx-target="#listing-results"
                hx-swap="outerHTML"
                hx-sync="#listing-controls:drop"
            {
                "Refresh"
            }
        }
    }
}
