//! Database module
//!
//! This module handles the connection pool, schema initialization, the
//! per-entity repositories, and the transactional user deletion path.

pub mod connection;
pub mod coordinator;
pub mod repositories;
pub mod schema;
pub mod service;
pub mod update;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, DatabaseConfig, DatabasePool};
pub use coordinator::UserDeletionCoordinator;
pub use repositories::{CategoryRepository, EventRepository, OrderRepository, UserRepository};
pub use schema::init_schema;
pub use service::DatabaseService;
