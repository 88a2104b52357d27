use maud::{html, Markup};
use url::Url;

use crate::origin::AgentProfile;

pub fn contact_card(agent: &AgentProfile) -> Markup {
    let whatsapp = agent.phone.as_deref().map(|phone| {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("https://wa.me/{digits}")
    });

    html! {
        section class="card contact-card" id="contact" {
            h2 { "Contact " (agent.name) }
            ul class="contact-list" {
                @if let Some(phone) = &agent.phone {
                    li { a href={ "tel:" (phone) } { (phone) } }
                }
                @if let Some(link) = &whatsapp {
                    li { a href=(link) target="_blank" rel="noopener" { "WhatsApp" } }
                }
                @if let Some(email) = &agent.email {
                    li { a href={ "mailto:" (email) } { (email) } }
                }
            }
            @if agent.phone.is_none() && agent.email.is_none() {
                p class="muted" { "Contact details are not available." }
            }
        }
    }
}

fn with_params(base: &str, params: &[(&str, &str)]) -> String {
    Url::parse_with_params(base, params)
        .map(String::from)
        .unwrap_or_else(|_| base.to_string())
}

struct ShareTarget {
    label: &'static str,
    href: String,
}

fn share_targets(page_url: &str, title: &str) -> Vec<ShareTarget> {
    let text = format!("{title} {page_url}");

    vec![
        ShareTarget {
            label: "Facebook",
            href: with_params("https://www.facebook.com/sharer/sharer.php", &[("u", page_url)]),
        },
        ShareTarget {
            label: "X",
            href: with_params(
                "https://twitter.com/intent/tweet",
                &[("url", page_url), ("text", title)],
            ),
        },
        ShareTarget {
            label: "WhatsApp",
            href: with_params("https://wa.me/", &[("text", text.as_str())]),
        },
        ShareTarget {
            label: "Email",
            href: format!(
                "mailto:?{}",
                url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("subject", title)
                    .append_pair("body", page_url)
                    .finish()
            ),
        },
    ]
}

pub fn share_links(page_url: &str, title: &str) -> Markup {
    html! {
        section class="card share-card" id="share" {
            h2 { "Share this profile" }
            ul class="share-list" {
                @for target in share_targets(page_url, title) {
                    li { a href=(target.href) target="_blank" rel="noopener" { (target.label) } }
                }
            }
            label for="share-url" class="muted" { "Profile link" }
            input id="share-url" type="text" readonly value=(page_url) onclick="this.select()";
        }
    }
}
