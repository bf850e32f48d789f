//! User Service Library
//!
//! This crate owns the in-memory user store and the use cases built on it.
//! The HTTP gateway injects it as a trait object.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Build the user service backed by a fresh in-memory store.
pub fn build_user_service(config: &UserServiceConfig) -> Arc<dyn UserService> {
    let store = if config.seed_users {
        InMemoryUserStore::seeded()
    } else {
        InMemoryUserStore::new()
    };
    info!(seeded = config.seed_users, "User store initialized");

    Arc::new(UserManager::new(Arc::new(store)))
}
