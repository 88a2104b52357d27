pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::site::site_layout;
pub use pages::{agent_not_found_page, error_page, listing_results, profile_page, ProfileVm};
