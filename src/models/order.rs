//! Order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub stripe_id: String,
    pub total_amount: String,
    pub event_id: Option<i64>,
    pub buyer_id: Option<i64>,
}

/// Order joined with its event title and buyer display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderWithDetails {
    pub id: i64,
    pub total_amount: String,
    pub created_at: DateTime<Utc>,
    pub event_title: String,
    pub event_id: i64,
    pub buyer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub stripe_id: String,
    pub total_amount: String,
    pub event_id: Option<i64>,
    pub buyer_id: Option<i64>,
}

/// Partial update: only the populated fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub total_amount: Option<String>,
    pub event_id: Option<i64>,
    pub buyer_id: Option<i64>,
}
