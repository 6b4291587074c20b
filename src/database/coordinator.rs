//! Coordinated user removal
//!
//! Deleting a user touches three tables: events lose their organizer
//! reference, orders lose their buyer reference, and the user row itself is
//! removed. The schema has no cascading deletes, so the unlinking is done
//! here, inside one transaction: either all three effects become visible or
//! none of them do.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info, warn};

use crate::models::user::User;
use crate::utils::errors::{Result, TicketryError};

/// Orchestrates the transactional removal of a user
///
/// Single-statement repository calls borrow a pooled connection for one round
/// trip each; this coordinator instead holds one connection for the whole
/// unlink-then-delete sequence and releases it at commit or rollback.
#[derive(Debug, Clone)]
pub struct UserDeletionCoordinator {
    pool: PgPool,
}

impl UserDeletionCoordinator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete the user identified by clerk ID, unlinking dependent rows
    ///
    /// An unknown clerk ID aborts before a transaction is opened; nothing is
    /// mutated. Any store failure after that rolls the transaction back in
    /// full, so partial unlinking never persists.
    pub async fn delete_by_clerk_id(&self, clerk_id: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, clerk_id, email, username, first_name, last_name, photo FROM users WHERE clerk_id = $1",
        )
        .bind(clerk_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| TicketryError::UnknownClerkId {
            clerk_id: clerk_id.to_string(),
        })?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(TicketryError::operation_failed)?;

        match Self::unlink_and_delete(&mut tx, user.id).await {
            Ok(deleted) => {
                tx.commit()
                    .await
                    .map_err(TicketryError::operation_failed)?;
                info!(user_id = deleted.id, clerk_id = %deleted.clerk_id, "User deleted");
                Ok(deleted)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Rollback after failed user deletion also failed");
                }
                Err(err)
            }
        }
    }

    async fn unlink_and_delete(
        tx: &mut Transaction<'_, Postgres>,
        user_id: i64,
    ) -> Result<User> {
        // The two unlink targets are disjoint tables; statement order is not
        // significant.
        let events = sqlx::query("UPDATE events SET organizer_id = NULL WHERE organizer_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await
            .map_err(TicketryError::operation_failed)?;

        let orders = sqlx::query("UPDATE orders SET buyer_id = NULL WHERE buyer_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await
            .map_err(TicketryError::operation_failed)?;

        debug!(
            user_id,
            unlinked_events = events.rows_affected(),
            unlinked_orders = orders.rows_affected(),
            "Unlinked dependent rows"
        );

        let deleted = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users WHERE id = $1
            RETURNING id, clerk_id, email, username, first_name, last_name, photo
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(TicketryError::operation_failed)?;

        // A concurrent deletion can win the race between the lookup and this
        // statement; the store's row lock serializes the two transactions and
        // the loser sees no row here.
        deleted.ok_or(TicketryError::UserNotFound { user_id })
    }
}
