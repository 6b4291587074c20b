//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub price: Option<String>,
    pub is_free: bool,
    pub url: Option<String>,
    pub category_id: Option<i64>,
    pub organizer_id: Option<i64>,
}

/// Event joined with its category name and organizer display name.
///
/// The joins are LEFT JOINs: an event with a cleared category or organizer
/// reference still appears, with the display fields null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventWithDetails {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub price: Option<String>,
    pub is_free: bool,
    pub url: Option<String>,
    pub category_id: Option<i64>,
    pub organizer_id: Option<i64>,
    pub category_name: Option<String>,
    pub organizer_first_name: Option<String>,
    pub organizer_last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub price: Option<String>,
    pub is_free: bool,
    pub url: Option<String>,
    pub category_id: Option<i64>,
    pub organizer_id: Option<i64>,
}

/// Partial update: only the populated fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub price: Option<String>,
    pub is_free: Option<bool>,
    pub url: Option<String>,
    pub category_id: Option<i64>,
    pub organizer_id: Option<i64>,
}
