pub mod connection;
pub mod domain_cache;

pub use connection::{init_db, Database};
