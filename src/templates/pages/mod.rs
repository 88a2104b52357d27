pub mod error;
pub mod listings;
pub mod profile;

pub use error::{agent_not_found_page, error_page};
pub use listings::listing_results;
pub use profile::{profile_page, ProfileVm};
