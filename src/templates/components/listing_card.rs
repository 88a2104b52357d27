use maud::{html, Markup};

use crate::origin::Listing;

/// `1250000` -> `"1,250,000"`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn price_label(listing: &Listing) -> String {
    let Some(price) = listing.price else {
        return "Price on request".to_string();
    };
    let currency = listing.currency.as_deref().unwrap_or("RM");
    let suffix = match listing.listing_type.as_deref() {
        Some("rent") => " / month",
        _ => "",
    };
    format!("{currency} {}{suffix}", format_price(price))
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        article class="listing-card" data-listing-id=(listing.id) {
            div class="listing-photo" {
                @if let Some(src) = &listing.cover_photo_url {
                    img src=(src) alt=(listing.title) loading="lazy";
                } @else {
                    div class="listing-photo-missing" { "No photo" }
                }
                @if let Some(kind) = &listing.listing_type {
                    span class={ "badge badge-" (kind) } { (kind) }
                }
            }
            div class="listing-body" {
                p class="listing-price" { (price_label(listing)) }
                h3 class="listing-title" { (listing.title) }
                @if let Some(address) = &listing.address {
                    p class="listing-address muted" { (address) }
                }
                ul class="listing-facts" {
                    @if let Some(kind) = &listing.property_type { li { (kind) } }
                    @if let Some(n) = listing.bed_rooms { li { (n) " bed" } }
                    @if let Some(n) = listing.bath_rooms { li { (n) " bath" } }
                    @if let Some(n) = listing.floor_size { li { (format_price(n.into())) " sqft" } }
                }
                @if let Some(at) = listing.published_at {
                    p class="listing-date muted" { "Listed " (at.format("%-d %b %Y")) }
                }
            }
        }
    }
}
