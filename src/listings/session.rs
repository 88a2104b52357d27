// src/listings/session.rs
use std::collections::VecDeque;

use super::controller::{Effect, Event, FetchRequest, FilterController, ListingView};
use super::filters::FilterState;
use crate::origin::ListingSource;

/// Drives a [`FilterController`] against a [`ListingSource`]: runs the
/// fetches it asks for and feeds the outcome back in.
pub struct ListingSession<'a, S: ListingSource + ?Sized> {
    source: &'a S,
    slug: String,
    controller: FilterController,
    fetches: usize,
}

impl<'a, S: ListingSource + ?Sized> ListingSession<'a, S> {
    pub fn new(source: &'a S, slug: impl Into<String>, controller: FilterController) -> Self {
        Self {
            source,
            slug: slug.into(),
            controller,
            fetches: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        self.controller.state()
    }

    pub fn view(&self) -> ListingView<'_> {
        self.controller.view()
    }

    /// Fetches issued so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Hand the controller over, e.g. to keep it for the rest of the page load.
    pub fn into_controller(self) -> FilterController {
        self.controller
    }

    pub fn dispatch(&mut self, event: Event) {
        let mut queue: VecDeque<Effect> = self.controller.handle(event).into();

        while let Some(effect) = queue.pop_front() {
            let Effect::Fetch(req) = effect else {
                continue;
            };

            self.fetches += 1;
            let next = run_fetch(self.source, &self.slug, &req);
            queue.extend(self.controller.handle(next));
        }
    }
}

/// Send one search to the origin and turn the outcome into the event that
/// completes `req`.
pub fn run_fetch<S>(source: &S, slug: &str, req: &FetchRequest) -> Event
where
    S: ListingSource + ?Sized,
{
    match source.search_listings(slug, req.tab, req.page, &req.body) {
        Ok(page) => {
            tracing::debug!(
                slug,
                tab = %req.tab,
                page = req.page,
                items = page.items.len(),
                "listing page fetched"
            );
            Event::FetchSucceeded { seq: req.seq, page }
        }
        Err(e) => {
            tracing::warn!(slug, tab = %req.tab, error = %e, "listing fetch failed");
            Event::FetchFailed {
                seq: req.seq,
                reason: e.to_string(),
            }
        }
    }
}
