//! Database repositories module
//!
//! One repository per entity; every method is a single-statement operation
//! against a pooled connection.

pub mod category;
pub mod event;
pub mod order;
pub mod user;

// Re-export repositories
pub use category::CategoryRepository;
pub use event::EventRepository;
pub use order::OrderRepository;
pub use user::UserRepository;
