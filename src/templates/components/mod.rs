use maud::{html, Markup};

pub mod contact;
pub mod listing_card;
pub mod placeholders;

pub use contact::{contact_card, share_links};
pub use listing_card::listing_card;
pub use placeholders::{empty_state, error_state, loading_state};

pub fn footer(website_url: &str, agency: Option<&str>) -> Markup {
    let year = chrono::Utc::now().format("%Y");
    html! {
        footer class="site-footer" {
            p {
                "© " (year) " "
                @if let Some(agency) = agency { (agency) } @else { "All rights reserved" }
            }
            p class="muted" {
                "Powered by "
                a href=(website_url) target="_blank" rel="noopener" { "Agent Sites" }
            }
        }
    }
}
