//! Order repository implementation

use crate::database::update::UpdateBuilder;
use crate::models::order::{CreateOrderRequest, Order, OrderWithDetails, UpdateOrderRequest};
use crate::utils::errors::{Result, TicketryError};
use sqlx::PgPool;

/// Columns a partial update may touch. The stripe id is the external payment
/// key and is never rewritten.
const UPDATABLE_COLUMNS: &[&str] = &["total_amount", "event_id", "buyer_id"];

#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new order
    ///
    /// Fails with a conflict on a duplicate stripe id; a dangling event or
    /// buyer reference is rejected by the store's foreign-key constraint.
    pub async fn create(&self, request: CreateOrderRequest) -> Result<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (stripe_id, total_amount, event_id, buyer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, stripe_id, total_amount, event_id, buyer_id
            "#,
        )
        .bind(request.stripe_id)
        .bind(request.total_amount)
        .bind(request.event_id)
        .bind(request.buyer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Find order by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, created_at, stripe_id, total_amount, event_id, buyer_id FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Find order by stripe ID, used for payment reconciliation
    pub async fn find_by_stripe_id(&self, stripe_id: &str) -> Result<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, created_at, stripe_id, total_amount, event_id, buyer_id FROM orders WHERE stripe_id = $1",
        )
        .bind(stripe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// List orders for the given event, plain rows without joins
    pub async fn get_orders_by_event(&self, event_id: i64) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, created_at, stripe_id, total_amount, event_id, buyer_id FROM orders WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// List orders placed by the given user, plain rows without joins
    pub async fn get_orders_by_user(&self, user_id: i64) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, created_at, stripe_id, total_amount, event_id, buyer_id FROM orders WHERE buyer_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// List all orders joined with event title and buyer display name
    ///
    /// Inner joins: an order whose event or buyer reference has been cleared
    /// is excluded from this view, while the plain queries above keep
    /// returning it. A LEFT JOIN variant would keep such orders visible here
    /// if the reporting requirement ever changes.
    pub async fn get_orders_with_details(&self) -> Result<Vec<OrderWithDetails>> {
        let orders = sqlx::query_as::<_, OrderWithDetails>(
            r#"
            SELECT o.id, o.total_amount, o.created_at,
                   e.title AS event_title, e.id AS event_id,
                   CONCAT(u.first_name, ' ', u.last_name) AS buyer
            FROM orders o
            JOIN events e ON o.event_id = e.id
            JOIN users u ON o.buyer_id = u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Apply a partial update to the order with the given ID
    pub async fn update(&self, id: i64, request: UpdateOrderRequest) -> Result<Order> {
        let (sql, values) = UpdateBuilder::new("orders", "id", UPDATABLE_COLUMNS)
            .maybe_set("total_amount", request.total_amount)?
            .maybe_set("event_id", request.event_id)?
            .maybe_set("buyer_id", request.buyer_id)?
            .build()?;

        let mut query = sqlx::query_as::<_, Order>(&sql).bind(id);
        for value in values {
            query = value.bind_to(query);
        }

        let order = query.fetch_optional(&self.pool).await?;

        order.ok_or(TicketryError::OrderNotFound { order_id: id })
    }

    /// Delete order by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TicketryError::OrderNotFound { order_id: id });
        }

        Ok(())
    }

    /// Clear the buyer reference on every order placed by the user
    ///
    /// Idempotent: running it again once no rows reference the id is a no-op.
    /// Returns the number of rows unlinked.
    pub async fn remove_buyer(&self, buyer_id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE orders SET buyer_id = NULL WHERE buyer_id = $1")
            .bind(buyer_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
