//! Domain-level constants.
//!
//! These constants define the records a fresh store starts with.

// =============================================================================
// Entity names
// =============================================================================

/// Entity name used in "not found" messages
pub const USER_ENTITY: &str = "User";

// =============================================================================
// Seed data
// =============================================================================

/// Records present in a freshly started store: (id, name, email)
pub const SEED_USERS: &[(u64, &str, &str)] = &[
    (1, "John Doe", "john@example.com"),
    (2, "Jane Smith", "jane@example.com"),
];

/// First identifier handed out by an empty store
pub const FIRST_USER_ID: u64 = 1;
