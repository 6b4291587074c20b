//! Test data factories
//!
//! Request-struct factories with unique external keys so tests do not trip
//! over each other's uniqueness constraints.

use chrono::{Duration, Utc};
use ticketry::models::{CreateEventRequest, CreateOrderRequest, CreateUserRequest};
use uuid::Uuid;

/// Short unique tag for external keys and names
pub fn unique_tag() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

pub fn user_request(tag: &str) -> CreateUserRequest {
    CreateUserRequest {
        clerk_id: format!("clerk_{tag}"),
        email: format!("{tag}@example.com"),
        username: format!("user_{tag}"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        photo: format!("https://img.example.com/{tag}.png"),
    }
}

pub fn event_request(category_id: Option<i64>, organizer_id: Option<i64>) -> CreateEventRequest {
    let start = Utc::now() + Duration::days(7);
    CreateEventRequest {
        title: "Test Event".to_string(),
        description: Some("A test event".to_string()),
        location: Some("Test Venue".to_string()),
        image_url: "https://img.example.com/event.png".to_string(),
        start_date_time: start,
        end_date_time: start + Duration::hours(2),
        price: Some("25".to_string()),
        is_free: false,
        url: None,
        category_id,
        organizer_id,
    }
}

pub fn order_request(tag: &str, event_id: Option<i64>, buyer_id: Option<i64>) -> CreateOrderRequest {
    CreateOrderRequest {
        stripe_id: format!("pi_{tag}"),
        total_amount: "25".to_string(),
        event_id,
        buyer_id,
    }
}
