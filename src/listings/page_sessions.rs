//! Filter controllers for open profile pages.
//!
//! Each rendered profile page gets an id (the `pid` form field). Fragment
//! requests carrying that id are replayed against the same
//! [`FilterController`], so a page keeps its initial snapshot, its
//! request sequence and its loading guard across htmx swaps.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use rand::rngs::OsRng;
use rand::RngCore;

use super::controller::{Effect, Event, FilterController, ListingView};
use super::filters::FilterState;
use super::session::run_fetch;
use crate::errors::ServerError;
use crate::origin::ListingSource;

/// How long an idle page keeps its controller.
pub const PAGE_SESSION_TTL: Duration = Duration::from_secs(30 * 60);
pub const MAX_PAGE_SESSIONS: usize = 10_000;

const PAGE_ID_BYTES: usize = 16;

struct Entry {
    slug: String,
    controller: FilterController,
    touched: Instant,
}

/// What became of a fragment request for a known page.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// No live page with that id (expired, evicted or never issued).
    Unknown,
    /// The page already has a fetch in flight; the trigger was ignored.
    Dropped,
    Rendered(T),
}

pub struct PageSessions {
    entries: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for PageSessions {
    fn default() -> Self {
        Self::new(PAGE_SESSION_TTL, MAX_PAGE_SESSIONS)
    }
}

impl PageSessions {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, ServerError> {
        self.entries.lock().map_err(|_| ServerError::InternalError)
    }

    /// Keep `controller` under `id` for the page about to be served.
    /// Idle pages are evicted first, then the oldest one if still full.
    pub fn open(
        &self,
        id: &str,
        slug: &str,
        controller: FilterController,
        now: Instant,
    ) -> Result<(), ServerError> {
        let mut entries = self.lock()?;

        entries.retain(|_, e| now.saturating_duration_since(e.touched) < self.ttl);
        if entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.touched)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(
            id.to_string(),
            Entry {
                slug: slug.to_string(),
                controller,
                touched: now,
            },
        );
        tracing::debug!(slug, page_sessions = entries.len(), "page session opened");
        Ok(())
    }

    /// Move page `id` to `next` and render the result.
    ///
    /// The event is derived from the page's current state, so going back to
    /// the first combination re-renders the held snapshot. The lock is
    /// released while the origin call runs; a trigger arriving for the same
    /// page meanwhile is [`Outcome::Dropped`].
    pub fn advance<S, T, F>(
        &self,
        source: &S,
        slug: &str,
        id: &str,
        next: FilterState,
        now: Instant,
        render: F,
    ) -> Result<Outcome<T>, ServerError>
    where
        S: ListingSource + ?Sized,
        F: FnOnce(&FilterState, ListingView<'_>) -> T,
    {
        let fetch = {
            let mut entries = self.lock()?;
            let Some(entry) = entries.get_mut(id) else {
                return Ok(Outcome::Unknown);
            };
            if entry.slug != slug || now.saturating_duration_since(entry.touched) >= self.ttl {
                return Ok(Outcome::Unknown);
            }
            entry.touched = now;

            if entry.controller.is_loading() {
                tracing::debug!(slug, "page busy, trigger dropped");
                return Ok(Outcome::Dropped);
            }

            let event = Event::between(entry.controller.state(), next);
            let fetch = entry
                .controller
                .handle(event)
                .into_iter()
                .find_map(|effect| match effect {
                    Effect::Fetch(req) => Some(req),
                    Effect::Render => None,
                });
            match fetch {
                Some(req) => req,
                None => {
                    let c = &entry.controller;
                    return Ok(Outcome::Rendered(render(c.state(), c.view())));
                }
            }
        };

        let completion = run_fetch(source, slug, &fetch);

        let mut entries = self.lock()?;
        let Some(entry) = entries.get_mut(id) else {
            return Ok(Outcome::Unknown);
        };
        entry.controller.handle(completion);
        let c = &entry.controller;
        Ok(Outcome::Rendered(render(c.state(), c.view())))
    }
}

/// Random hex id for a new page session.
pub fn new_page_id() -> String {
    let mut raw = [0u8; PAGE_ID_BYTES];
    OsRng.fill_bytes(&mut raw);
    raw.iter().map(|b| format!("{b:02x}")).collect()
}
