use maud::{html, Markup};

use crate::templates::layouts::site::site_layout;

/// Basic HTML error page.
pub fn error_page(status: u16, message: &str) -> Markup {
    site_layout(
        &format!("Error {status}"),
        None,
        html! {
            main class="container" {
                div class="placeholder" {
                    h1 { "Error " (status) }
                    p class="muted" { (message) }
                }
            }
        },
    )
}

/// The domain resolved, but the origin has no such agent.
pub fn agent_not_found_page() -> Markup {
    site_layout(
        "Agent not found",
        None,
        html! {
            main class="container" {
                div class="placeholder" {
                    h1 { "Agent not found" }
                    p class="muted" {
                        "This profile is no longer available. It may have been moved or removed."
                    }
                }
            }
        },
    )
}
