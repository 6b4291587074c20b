//! User repository implementation

use crate::database::update::UpdateBuilder;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::utils::errors::{Result, TicketryError};
use sqlx::PgPool;

/// Columns a partial update may touch. The clerk id is the external identity
/// key and is never rewritten through this path.
const UPDATABLE_COLUMNS: &[&str] = &["email", "username", "first_name", "last_name", "photo"];

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    ///
    /// Fails with a conflict on a duplicate clerk id, email or username.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (clerk_id, email, username, first_name, last_name, photo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, clerk_id, email, username, first_name, last_name, photo
            "#,
        )
        .bind(request.clerk_id)
        .bind(request.email)
        .bind(request.username)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, clerk_id, email, username, first_name, last_name, photo FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by clerk ID
    pub async fn find_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, clerk_id, email, username, first_name, last_name, photo FROM users WHERE clerk_id = $1",
        )
        .bind(clerk_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Apply a partial update to the user with the given clerk ID
    ///
    /// Writes exactly the populated fields. An empty request is rejected
    /// before any round trip.
    pub async fn update_by_clerk_id(
        &self,
        clerk_id: &str,
        request: UpdateUserRequest,
    ) -> Result<User> {
        let (sql, values) = UpdateBuilder::new("users", "clerk_id", UPDATABLE_COLUMNS)
            .maybe_set("email", request.email)?
            .maybe_set("username", request.username)?
            .maybe_set("first_name", request.first_name)?
            .maybe_set("last_name", request.last_name)?
            .maybe_set("photo", request.photo)?
            .build()?;

        let mut query = sqlx::query_as::<_, User>(&sql).bind(clerk_id.to_string());
        for value in values {
            query = value.bind_to(query);
        }

        let user = query.fetch_optional(&self.pool).await?;

        user.ok_or_else(|| TicketryError::UnknownClerkId {
            clerk_id: clerk_id.to_string(),
        })
    }

    /// Delete user by surrogate ID and return the deleted record
    ///
    /// Low-level primitive: removal that must also unlink dependent events
    /// and orders goes through the deletion coordinator instead.
    pub async fn delete(&self, id: i64) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users WHERE id = $1
            RETURNING id, clerk_id, email, username, first_name, last_name, photo
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(TicketryError::UserNotFound { user_id: id })
    }
}
