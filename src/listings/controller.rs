//! Tab / search / filter state for one page load.
//!
//! [`FilterController::handle`] maps an [`Event`] to the next state plus the
//! effects the caller must carry out. It never performs I/O itself.

use super::filters::{FilterState, Filters, SearchBody, Tab, MAX_PAGE};
use crate::origin::{Listing, ListingPage};

/// One listing search the caller should send to the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Echoed back in the completion event.
    pub seq: u64,
    pub tab: Tab,
    pub page: u32,
    pub body: SearchBody,
}

#[derive(Debug, Clone)]
pub enum Event {
    TabSelected(Tab),
    /// Search text after the debounce settled.
    KeywordSettled(String),
    FiltersApplied(Filters),
    FiltersCleared,
    PageSelected(u32),
    /// Several inputs changed in one go, e.g. a form reset.
    Navigate(FilterState),
    /// Manual retry, or re-evaluating a restored state.
    Reload,
    FetchSucceeded { seq: u64, page: ListingPage },
    FetchFailed { seq: u64, reason: String },
}

impl Event {
    /// The trigger that moves a page from `current` to `next`.
    ///
    /// A single changed input maps to its own event; anything else becomes
    /// [`Event::Navigate`]. An unchanged state is a [`Event::Reload`].
    pub fn between(current: &FilterState, next: FilterState) -> Event {
        let tab = current.tab != next.tab;
        let keyword = current.keyword.trim() != next.keyword.trim();
        let filters = current.filters != next.filters;
        let page = current.page != next.page;

        match (tab, keyword, filters, page) {
            (false, false, false, false) => Event::Reload,
            (false, false, false, true) => Event::PageSelected(next.page),
            (true, false, false, _) if next.page == 1 => Event::TabSelected(next.tab),
            (false, true, false, _) if next.page == 1 => Event::KeywordSettled(next.keyword),
            (false, false, true, _) if next.page == 1 => {
                if next.filters.is_empty() {
                    Event::FiltersCleared
                } else {
                    Event::FiltersApplied(next.filters)
                }
            }
            _ => Event::Navigate(next),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw from [`FilterController::view`].
    Render,
    Fetch(FetchRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingView<'a> {
    Loading,
    /// The fetch worked but matched nothing.
    Empty,
    /// The fetch failed; offer a manual refresh.
    Error(&'a str),
    Listings {
        items: &'a [Listing],
        total_count: u64,
        page: u32,
        page_count: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Display {
    Loading,
    Empty,
    Error(String),
    Listings,
}

#[derive(Debug)]
pub struct FilterController {
    state: FilterState,
    /// The page the visitor first saw, if it was supplied.
    initial: Option<ListingPage>,
    snapshot: Vec<Listing>,
    display: Display,
    total_count: u64,
    limit: Option<u32>,
    in_flight: Option<u64>,
    last_seq: u64,
}

impl FilterController {
    pub fn new(initial: Option<ListingPage>) -> Self {
        Self::restore(FilterState::default(), initial)
    }

    /// Controller already positioned at `state`, e.g. rebuilt from a query
    /// string. Nothing is shown until the first event.
    pub fn restore(state: FilterState, initial: Option<ListingPage>) -> Self {
        let mut controller = Self {
            state,
            initial: None,
            snapshot: Vec::new(),
            display: Display::Loading,
            total_count: 0,
            limit: None,
            in_flight: None,
            last_seq: 0,
        };
        if let Some(page) = initial {
            if controller.state.is_initial() {
                controller.show(page.clone());
            }
            controller.initial = Some(page);
        }
        controller
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn view(&self) -> ListingView<'_> {
        match &self.display {
            Display::Loading => ListingView::Loading,
            Display::Empty => ListingView::Empty,
            Display::Error(reason) => ListingView::Error(reason),
            Display::Listings => ListingView::Listings {
                items: &self.snapshot,
                total_count: self.total_count,
                page: self.state.page,
                page_count: self.page_count(),
            },
        }
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::FetchSucceeded { seq, page } => self.complete(seq, Ok(page)),
            Event::FetchFailed { seq, reason } => self.complete(seq, Err(reason)),
            // While a fetch is outstanding every other trigger is dropped.
            _ if self.is_loading() => {
                tracing::debug!("listing fetch in flight, trigger dropped");
                Vec::new()
            }
            Event::TabSelected(tab) => {
                self.state.tab = tab;
                self.state.page = 1;
                self.settle()
            }
            Event::KeywordSettled(keyword) => {
                if keyword.trim() == self.state.keyword.trim() {
                    return Vec::new();
                }
                self.state.keyword = keyword.trim().to_string();
                self.state.page = 1;
                self.settle()
            }
            Event::FiltersApplied(filters) => {
                self.state.filters = filters;
                self.state.page = 1;
                self.settle()
            }
            Event::FiltersCleared => {
                self.state.filters = Filters::default();
                self.state.page = 1;
                self.settle()
            }
            Event::PageSelected(page) if page > 0 => {
                self.state.page = page.min(MAX_PAGE);
                self.settle()
            }
            Event::PageSelected(_) => Vec::new(),
            Event::Navigate(next) => {
                self.state = next;
                self.state.keyword = self.state.keyword.trim().to_string();
                self.state.page = self.state.page.clamp(1, MAX_PAGE);
                self.settle()
            }
            Event::Reload => self.settle(),
        }
    }

    /// Serve the held initial page when the visitor is back at the
    /// starting combination; otherwise start exactly one fetch.
    fn settle(&mut self) -> Vec<Effect> {
        if self.state.is_initial() {
            if let Some(initial) = self.initial.clone() {
                self.show(initial);
                return vec![Effect::Render];
            }
        }

        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        self.display = Display::Loading;

        vec![
            Effect::Render,
            Effect::Fetch(FetchRequest {
                seq: self.last_seq,
                tab: self.state.tab,
                page: self.state.page,
                body: self.state.search_body(),
            }),
        ]
    }

    fn complete(&mut self, seq: u64, result: Result<ListingPage, String>) -> Vec<Effect> {
        // Only the newest request may touch the snapshot.
        if self.in_flight != Some(seq) {
            tracing::debug!(seq, latest = self.last_seq, "stale listing response discarded");
            return Vec::new();
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                if self.state.is_initial() && self.initial.is_none() {
                    self.initial = Some(page.clone());
                }
                self.show(page);
            }
            Err(reason) => self.display = Display::Error(reason),
        }
        vec![Effect::Render]
    }

    fn show(&mut self, page: ListingPage) {
        let ListingPage { items, pagination } = page;

        self.total_count = match pagination {
            Some(p) => p.total_count,
            None => self.total_count.max(items.len() as u64),
        };
        if let Some(p) = pagination {
            self.limit = Some(p.limit).filter(|l| *l > 0);
        }

        self.display = if items.is_empty() {
            Display::Empty
        } else {
            Display::Listings
        };
        self.snapshot = items;
    }

    fn page_count(&self) -> u32 {
        let by_total = match self.limit {
            Some(limit) => {
                u32::try_from(self.total_count.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
            }
            None => 1,
        };
        by_total.max(self.state.page).max(1)
    }
}
