use maud::{html, Markup};

use crate::listings::{FilterState, Tab};
use crate::origin::AgentProfile;
use crate::templates::components::{contact_card, footer, share_links};
use crate::templates::layouts::site::site_layout;

pub struct ProfileVm<'a> {
    pub agent: &'a AgentProfile,
    /// Canonical public URL of this profile, used for sharing.
    pub page_url: &'a str,
    pub website_url: &'a str,
    pub state: &'a FilterState,
    /// Page session id, sent back with every fragment request.
    pub page_id: &'a str,
    /// Pre-rendered `#listing-results` block.
    pub results: Markup,
}

struct FilterGroup {
    key: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
}

const FILTER_GROUPS: &[FilterGroup] = &[
    FilterGroup {
        key: "types",
        label: "Property type",
        options: &[
            ("condo", "Condominium"),
            ("apartment", "Apartment"),
            ("terrace", "Terrace"),
            ("semi-d", "Semi-D"),
            ("bungalow", "Bungalow"),
            ("land", "Land"),
            ("commercial", "Commercial"),
        ],
    },
    FilterGroup {
        key: "bedRooms",
        label: "Bedrooms",
        options: &[("1", "1"), ("2", "2"), ("3", "3"), ("4", "4"), ("5+", "5+")],
    },
    FilterGroup {
        key: "bathRooms",
        label: "Bathrooms",
        options: &[("1", "1"), ("2", "2"), ("3", "3"), ("4+", "4+")],
    },
    FilterGroup {
        key: "tenures",
        label: "Tenure",
        options: &[("freehold", "Freehold"), ("leasehold", "Leasehold")],
    },
    FilterGroup {
        key: "floorLevels",
        label: "Floor level",
        options: &[("low", "Low"), ("mid", "Mid"), ("high", "High")],
    },
    FilterGroup {
        key: "furnishings",
        label: "Furnishing",
        options: &[
            ("unfurnished", "Unfurnished"),
            ("partial", "Partly furnished"),
            ("full", "Fully furnished"),
        ],
    },
];

pub fn profile_page(vm: &ProfileVm) -> Markup {
    let agent = vm.agent;
    let title = match &agent.agency_name {
        Some(agency) => format!("{} | {}", agent.name, agency),
        None => agent.name.clone(),
    };

    site_layout(
        &title,
        agent.bio.as_deref(),
        html! {
            header class="site-header" {
                div class="container" {
                    strong { (agent.agency_name.as_deref().unwrap_or(&agent.name)) }
                    nav {
                        a href="#listings" { "Listings" }
                        @if agent.bio.is_some() { a href="#about" { "About" } }
                        a href="#contact" { "Contact" }
                        a href="#share" { "Share" }
                    }
                }
            }
            main class="container" {
                section class="hero" {
                    @if let Some(photo) = &agent.photo_url {
                        img src=(photo) alt=(agent.name);
                    }
                    div {
                        h1 { (agent.name) }
                        @if let Some(agency) = &agent.agency_name {
                            p class="muted" { (agency) }
                        }
                        @if let Some(licence) = &agent.license_no {
                            p class="muted" { "Licence " (licence) }
                        }
                    }
                }

                @if let Some(bio) = &agent.bio {
                    section class="card" id="about" {
                        h2 { "About" }
                        p { (bio) }
                    }
                }

                section id="listings" {
                    h2 { "Listings" }
                    (listing_controls(&agent.slug, vm.page_id, vm.state))
                    (vm.results)
                }

                (contact_card(agent))
                (share_links(vm.page_url, &title))
            }
            (footer(vm.website_url, agent.agency_name.as_deref()))
        },
    )
}

/// Tabs, search box and filter panel. One form so htmx sends the whole
/// state with every request; `hx-sync ... drop` ignores triggers while a
/// request is in flight and the search box waits for typing to pause.
fn listing_controls(slug: &str, page_id: &str, state: &FilterState) -> Markup {
    let active = state.filters.active_count();

    html! {
        form
            id="listing-controls"
            hx-get={ "/_listings/" (slug) }
            hx-target="#listing-results"
            hx-swap="outerHTML"
            hx-sync="this:drop"
            hx-trigger="submit, change from:.tab-input, input changed delay:600ms from:#keyword, reset delay:10ms"
        {
            input type="hidden" name="pid" value=(page_id);

            div class="tabs" role="tablist" {
                @for tab in Tab::ALL {
                    label {
                        input
                            type="radio"
                            class="tab-input"
                            name="tab"
                            value=(tab.as_str())
                            checked[state.tab == tab];
                        span { (tab.label()) }
                    }
                }
            }

            div class="search-row" {
                label class="sr-only" for="keyword" { "Search listings" }
                input
                    type="search"
                    id="keyword"
                    name="keyword"
                    placeholder="Search by title, area or project"
                    autocomplete="off"
                    value=(state.keyword);
            }

            details class="filter-panel" {
                summary {
                    "Filters"
                    @if active > 0 { " (" (active) ")" }
                }

                fieldset {
                    legend { "Price" }
                    label {
                        "Min "
                        input type="number" name="minPrice" min="0" step="1000" value=[state.filters.min_price];
                    }
                    label {
                        "Max "
                        input type="number" name="maxPrice" min="0" step="1000" value=[state.filters.max_price];
                    }
                }

                @for group in FILTER_GROUPS {
                    @let selected = state
                        .filters
                        .code_sets()
                        .into_iter()
                        .find(|(key, _)| *key == group.key)
                        .map(|(_, set)| set.clone())
                        .unwrap_or_default();
                    fieldset {
                        legend { (group.label) }
                        @for (code, label) in group.options {
                            label {
                                input
                                    type="checkbox"
                                    name=(group.key)
                                    value=(code)
                                    checked[selected.contains(*code)];
                                " " (label)
                            }
                        }
                    }
                }

                div class="filter-actions" {
                    button type="submit" class="btn" { "Apply filters" }
                    " "
                    button type="reset" class="btn secondary" { "Clear" }
                }
            }
        }
    }
}
