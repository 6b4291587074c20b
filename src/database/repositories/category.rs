//! Category repository implementation

use crate::models::category::Category;
use crate::utils::errors::Result;
use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new category
    ///
    /// Fails with a conflict when a category with the same name exists.
    pub async fn create(&self, name: &str) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    /// List all categories, order unspecified
    pub async fn find_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    /// Find a category by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    /// Check whether a category with the given name exists
    pub async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
