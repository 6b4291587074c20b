//! Error handling for ticketry
//!
//! This module defines the main error type used throughout the persistence
//! layer and the translation from raw store errors to typed failure kinds.

use thiserror::Error;

/// Main error type for ticketry operations
#[derive(Error, Debug)]
pub enum TicketryError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unique constraint violated: {constraint}")]
    Conflict { constraint: String },

    #[error("Referenced row does not exist: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("User not found for clerk id: {clerk_id}")]
    UnknownClerkId { clerk_id: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {source}")]
    OperationFailed {
        #[source]
        source: Box<TicketryError>,
    },
}

/// Result type alias for ticketry operations
pub type Result<T> = std::result::Result<T, TicketryError>;

impl From<sqlx::Error> for TicketryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err
                .constraint()
                .unwrap_or("unknown constraint")
                .to_string();
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return TicketryError::Conflict { constraint };
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return TicketryError::ForeignKeyViolation { constraint };
                }
                _ => {}
            }
        }
        TicketryError::Database(err)
    }
}

impl TicketryError {
    /// Wrap a store failure that aborted a multi-statement operation
    pub(crate) fn operation_failed(err: sqlx::Error) -> Self {
        TicketryError::OperationFailed {
            source: Box::new(err.into()),
        }
    }

    /// Check whether the error reports a missing row
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TicketryError::UserNotFound { .. }
                | TicketryError::UnknownClerkId { .. }
                | TicketryError::EventNotFound { .. }
                | TicketryError::OrderNotFound { .. }
        )
    }

    /// Check whether the error reports a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, TicketryError::Conflict { .. })
    }
}
