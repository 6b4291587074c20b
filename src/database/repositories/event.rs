//! Event repository implementation

use crate::database::update::UpdateBuilder;
use crate::models::event::{CreateEventRequest, Event, EventWithDetails, UpdateEventRequest};
use crate::utils::errors::{Result, TicketryError};
use sqlx::PgPool;

const UPDATABLE_COLUMNS: &[&str] = &[
    "title",
    "description",
    "location",
    "image_url",
    "start_date_time",
    "end_date_time",
    "price",
    "is_free",
    "url",
    "category_id",
    "organizer_id",
];

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    ///
    /// The category and organizer references are optional; a dangling
    /// reference is rejected by the store's foreign-key constraint.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, location, image_url, start_date_time, end_date_time, price, is_free, url, category_id, organizer_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, description, location, created_at, image_url, start_date_time, end_date_time, price, is_free, url, category_id, organizer_id
            "#,
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.location)
        .bind(request.image_url)
        .bind(request.start_date_time)
        .bind(request.end_date_time)
        .bind(request.price)
        .bind(request.is_free)
        .bind(request.url)
        .bind(request.category_id)
        .bind(request.organizer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find an event by ID, joined with category and organizer display fields
    ///
    /// LEFT JOINs: a cleared category or organizer reference yields a full
    /// record with null display fields.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<EventWithDetails>> {
        let event = sqlx::query_as::<_, EventWithDetails>(
            r#"
            SELECT e.id, e.title, e.description, e.location, e.created_at, e.image_url,
                   e.start_date_time, e.end_date_time, e.price, e.is_free, e.url,
                   e.category_id, e.organizer_id,
                   c.name AS category_name,
                   u.first_name AS organizer_first_name,
                   u.last_name AS organizer_last_name
            FROM events e
            LEFT JOIN categories c ON e.category_id = c.id
            LEFT JOIN users u ON e.organizer_id = u.id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events in the same denormalized shape as find_by_id
    pub async fn get_all(&self) -> Result<Vec<EventWithDetails>> {
        let events = sqlx::query_as::<_, EventWithDetails>(
            r#"
            SELECT e.id, e.title, e.description, e.location, e.created_at, e.image_url,
                   e.start_date_time, e.end_date_time, e.price, e.is_free, e.url,
                   e.category_id, e.organizer_id,
                   c.name AS category_name,
                   u.first_name AS organizer_first_name,
                   u.last_name AS organizer_last_name
            FROM events e
            LEFT JOIN categories c ON e.category_id = c.id
            LEFT JOIN users u ON e.organizer_id = u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Apply a partial update to the event with the given ID
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event> {
        let (sql, values) = UpdateBuilder::new("events", "id", UPDATABLE_COLUMNS)
            .maybe_set("title", request.title)?
            .maybe_set("description", request.description)?
            .maybe_set("location", request.location)?
            .maybe_set("image_url", request.image_url)?
            .maybe_set("start_date_time", request.start_date_time)?
            .maybe_set("end_date_time", request.end_date_time)?
            .maybe_set("price", request.price)?
            .maybe_set("is_free", request.is_free)?
            .maybe_set("url", request.url)?
            .maybe_set("category_id", request.category_id)?
            .maybe_set("organizer_id", request.organizer_id)?
            .build()?;

        let mut query = sqlx::query_as::<_, Event>(&sql).bind(id);
        for value in values {
            query = value.bind_to(query);
        }

        let event = query.fetch_optional(&self.pool).await?;

        event.ok_or(TicketryError::EventNotFound { event_id: id })
    }

    /// Delete event by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TicketryError::EventNotFound { event_id: id });
        }

        Ok(())
    }

    /// List events organized by the given user, plain rows without joins
    pub async fn get_events_by_organizer(&self, organizer_id: i64) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, location, created_at, image_url, start_date_time, end_date_time, price, is_free, url, category_id, organizer_id FROM events WHERE organizer_id = $1",
        )
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// List events in the given category, plain rows without joins
    pub async fn get_events_by_category(&self, category_id: i64) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, location, created_at, image_url, start_date_time, end_date_time, price, is_free, url, category_id, organizer_id FROM events WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Clear the organizer reference on every event organized by the user
    ///
    /// Idempotent: running it again once no rows reference the id is a no-op.
    /// Returns the number of rows unlinked.
    pub async fn remove_organizer(&self, organizer_id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE events SET organizer_id = NULL WHERE organizer_id = $1")
            .bind(organizer_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
