//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The HTTP gateway and the user store both build on these types.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use user::{parse_user_id, seed_users, User, UserId, UserPayload};
