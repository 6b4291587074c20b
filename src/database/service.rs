//! Database service layer
//!
//! This module provides a single handle over the per-entity repositories and
//! the user deletion coordinator.

use crate::database::connection::DatabasePool;
use crate::database::coordinator::UserDeletionCoordinator;
use crate::database::repositories::{
    CategoryRepository, EventRepository, OrderRepository, UserRepository,
};
use crate::models::user::User;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub categories: CategoryRepository,
    pub users: UserRepository,
    pub events: EventRepository,
    pub orders: OrderRepository,
    deletion: UserDeletionCoordinator,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            categories: CategoryRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            deletion: UserDeletionCoordinator::new(pool),
        }
    }

    /// Remove a user and unlink the events and orders referencing it
    ///
    /// Goes through the deletion coordinator, not the user repository's
    /// delete primitive, so the unlinking and the delete happen atomically.
    pub async fn delete_user(&self, clerk_id: &str) -> Result<User> {
        self.deletion.delete_by_clerk_id(clerk_id).await
    }

    /// Check whether a category with the given name exists
    pub async fn category_exists(&self, name: &str) -> Result<bool> {
        self.categories.exists(name).await
    }
}
