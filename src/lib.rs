//! Ticketry persistence layer
//!
//! PostgreSQL-backed storage for an event ticketing platform. The crate
//! exposes one repository per entity (categories, users, events, orders),
//! a shared partial-update builder, denormalized read views, and a
//! transactional user removal path that maintains referential integrity by
//! hand because the schema has no cascading deletes.
//!
//! Page rendering, routing, authentication and payment handling live in the
//! embedding application: this layer trusts the identifiers it is given and
//! hands back plain records or typed errors.

pub mod config;
pub mod database;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, TicketryError};

// Re-export main components for easy access
pub use database::{DatabasePool, DatabaseService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
