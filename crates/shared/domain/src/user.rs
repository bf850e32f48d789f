//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::SEED_USERS;

/// Store-assigned user identifier
pub type UserId = u64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(value_type = u64, example = 1))]
    pub id: UserId,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
}

impl User {
    /// Create a user from an identifier and an input payload
    pub fn new(id: UserId, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
        }
    }

    /// Overwrite name and email, keeping the identifier
    pub fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
    }
}

/// Parse a path segment into a user identifier.
///
/// Only the canonical decimal form is accepted: "1" yields id 1, while
/// "01", "+1" and "abc" yield `None` and never match a stored user.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    let id: UserId = raw.parse().ok()?;
    (id.to_string() == raw).then_some(id)
}

/// Name and email as supplied on create and update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPayload {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Ann"))]
    pub name: String,
    /// Email address (not validated)
    #[cfg_attr(feature = "openapi", schema(example = "ann@x.com"))]
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Records a freshly started store is populated with
pub fn seed_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|&(id, name, email)| User::new(id, UserPayload::new(name, email)))
        .collect()
}
