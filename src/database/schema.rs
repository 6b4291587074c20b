//! Schema initialization
//!
//! Creates the four tables idempotently at process start. The foreign keys
//! deliberately carry no ON DELETE action: when a referenced row is removed,
//! the application clears the reference itself (see the deletion
//! coordinator), so dependent rows survive with a null reference instead of
//! disappearing.

use crate::database::connection::DatabasePool;
use crate::utils::errors::Result;

const CREATE_CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) UNIQUE NOT NULL
)
"#;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    clerk_id VARCHAR(255) UNIQUE NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    username VARCHAR(255) UNIQUE NOT NULL,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    photo VARCHAR(255) NOT NULL
)
"#;

const CREATE_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    location VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    image_url VARCHAR(255) NOT NULL,
    start_date_time TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    end_date_time TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    price VARCHAR(255),
    is_free BOOLEAN NOT NULL DEFAULT FALSE,
    url VARCHAR(255),
    category_id BIGINT REFERENCES categories(id),
    organizer_id BIGINT REFERENCES users(id)
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
    stripe_id VARCHAR(255) UNIQUE NOT NULL,
    total_amount VARCHAR(255) NOT NULL,
    event_id BIGINT REFERENCES events(id),
    buyer_id BIGINT REFERENCES users(id)
)
"#;

/// Ensure the four tables and their constraints exist
pub async fn init_schema(pool: &DatabasePool) -> Result<()> {
    // Dependency order: events and orders reference categories and users.
    for statement in [CREATE_CATEGORIES, CREATE_USERS, CREATE_EVENTS, CREATE_ORDERS] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
