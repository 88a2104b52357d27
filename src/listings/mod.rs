pub mod controller;
pub mod filters;
pub mod page_sessions;
pub mod session;

pub use controller::{Effect, Event, FetchRequest, FilterController, ListingView};
pub use filters::{FilterState, Filters, SearchBody, Tab};
pub use page_sessions::{Outcome, PageSessions};
pub use session::ListingSession;
