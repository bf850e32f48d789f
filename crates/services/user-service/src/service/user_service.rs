//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{DomainError, User, UserId, UserPayload, USER_ENTITY};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Create a new user with a store-assigned ID
    async fn create_user(&self, payload: UserPayload) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update_user(&self, id: UserId, payload: UserPayload) -> AppResult<User>;

    /// Remove user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        tracing::debug!(user_id = id, "Looking up user");
        self.repo.find_by_id(id).await?.ok_or_not_found(USER_ENTITY)
    }

    async fn create_user(&self, payload: UserPayload) -> AppResult<User> {
        let user = self.repo.create(payload).await?;
        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, payload: UserPayload) -> AppResult<User> {
        let user = self
            .repo
            .update(id, payload)
            .await?
            .ok_or_not_found(USER_ENTITY)?;
        tracing::info!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(USER_ENTITY).into());
        }
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
