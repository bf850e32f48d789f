//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{seed_users, User, UserId, UserPayload, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups are linear scans by identifier; records keep insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Append a new user with the next identifier
    async fn create(&self, payload: UserPayload) -> AppResult<User>;

    /// Overwrite name and email; `None` if the user does not exist
    async fn update(&self, id: UserId, payload: UserPayload) -> AppResult<Option<User>>;

    /// Remove user by ID; `false` if the user does not exist
    async fn delete(&self, id: UserId) -> AppResult<bool>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    /// Never decreases, so identifiers are not reused after a delete
    next_id: UserId,
}

/// Process-memory implementation of UserRepository.
///
/// All access goes through a single read/write lock; concurrent requests
/// see each mutation atomically.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a store holding the seed records
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store holding `users` in the given order
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|u| u.id + 1)
            .max()
            .unwrap_or(FIRST_USER_ID);

        Self {
            state: RwLock::new(StoreState { users, next_id }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, payload: UserPayload) -> AppResult<User> {
        let mut state = self.state.write().await;
        let user = User::new(state.next_id, payload);
        state.next_id += 1;
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, payload: UserPayload) -> AppResult<Option<User>> {
        let mut state = self.state.write().await;
        Ok(state.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.apply(payload);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        match state.users.iter().position(|u| u.id == id) {
            Some(index) => {
                // `remove` shifts the tail, keeping insertion order
                state.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.state.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn payload(name: &str, email: &str) -> UserPayload {
        UserPayload::new(name, email)
    }

    #[tokio::test]
    async fn test_seeded_store_lists_seed_records_in_order() {
        let store = InMemoryUserStore::seeded();
        let users = store.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_create_assigns_count_plus_one_without_deletes() {
        let store = InMemoryUserStore::seeded();

        for expected in 3..=6 {
            let before = store.count().await.unwrap();
            let user = store.create(payload("New", "new@x.com")).await.unwrap();
            assert_eq!(user.id, before as UserId + 1);
            assert_eq!(user.id, expected);
        }
    }

    #[tokio::test]
    async fn test_create_on_empty_store_starts_at_one() {
        let store = InMemoryUserStore::new();
        let user = store.create(payload("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_identifiers_not_reused_after_delete() {
        let store = InMemoryUserStore::seeded();

        assert!(store.delete(1).await.unwrap());
        let user = store.create(payload("Ann", "ann@x.com")).await.unwrap();

        // count + 1 would be 2, which still belongs to Jane
        assert_eq!(user.id, 3);
        let ids: Vec<UserId> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_get_after_create_returns_same_record() {
        let store = InMemoryUserStore::seeded();
        let created = store.create(payload("Ann", "ann@x.com")).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let store = InMemoryUserStore::seeded();

        let updated = store
            .update(1, payload("Johnny", "johnny@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, 1);

        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.name, "Johnny");
        assert_eq!(found.email, "johnny@example.com");

        // Position in the sequence is unchanged
        assert_eq!(store.list().await.unwrap()[0].id, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_returns_none() {
        let store = InMemoryUserStore::seeded();
        let result = store.update(99, payload("X", "x@x.com")).await.unwrap();
        assert!(result.is_none());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let store = InMemoryUserStore::seeded();

        assert!(store.delete(2).await.unwrap());
        assert!(store.find_by_id(2).await.unwrap().is_none());
        assert!(!store.delete(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_remaining() {
        let store = InMemoryUserStore::seeded();
        store.create(payload("Ann", "ann@x.com")).await.unwrap();
        store.create(payload("Bob", "bob@x.com")).await.unwrap();

        assert!(store.delete(2).await.unwrap());

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["John Doe", "Ann", "Bob"]);
    }

    #[tokio::test]
    async fn test_list_length_tracks_creates_and_deletes() {
        let store = InMemoryUserStore::seeded();
        assert_eq!(store.list().await.unwrap().len(), 2);

        store.create(payload("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 3);

        store.delete(1).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);

        // Unsuccessful delete leaves the length alone
        store.delete(1).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(payload(&format!("user{i}"), "u@x.com"))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<UserId>>());
        assert_eq!(store.count().await.unwrap(), 50);
    }
}
