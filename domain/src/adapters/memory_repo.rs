use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::seed::default_users;
use crate::{CoreError, User, UserStore};

/// In-memory user store backed by a `Vec` behind a mutex.
///
/// Each operation holds the lock for its whole duration, so sharing one
/// instance across threads (e.g. through an `Arc`) is safe.
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// A store holding the default seed records.
    pub fn seeded() -> Self {
        Self::with_users(default_users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    // A panic while holding the lock can only interrupt a push or a clone,
    // neither of which leaves the vector half-written.
    fn users(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn add_user(&self, user: User) -> User {
        self.users().push(user.clone());
        user
    }

    fn get_user_by_index(&self, index: i64) -> Result<User, CoreError> {
        let users = self.users();
        usize::try_from(index)
            .ok()
            .and_then(|i| users.get(i))
            .cloned()
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: users.len(),
            })
    }

    fn get_users(&self) -> Vec<User> {
        self.users().clone()
    }

    fn len(&self) -> usize {
        self.users().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ali() -> User {
        User::new(4, "Ali", "Ben")
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty());
        assert!(store.get_users().is_empty());
    }

    #[test]
    fn seeded_store_holds_three() {
        let store = InMemoryUserStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get_users(), default_users());
    }

    #[test]
    fn add_returns_same_record_and_appends() {
        let store = InMemoryUserStore::seeded();
        let returned = store.add_user(ali());
        assert_eq!(returned, ali());
        assert_eq!(store.len(), 4);
        assert_eq!(store.get_users().last(), Some(&ali()));
    }

    #[test]
    fn get_rejects_out_of_range() {
        let store = InMemoryUserStore::seeded();
        let err = store.get_user_by_index(3).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 3, len: 3 });
        let err = store.get_user_by_index(-1).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: -1, len: 3 });
        assert!(store.get_user_by_index(i64::MAX).is_err());
        assert!(store.get_user_by_index(i64::MIN).is_err());
    }

    #[test]
    fn get_on_empty_store_fails() {
        let store = InMemoryUserStore::new();
        assert!(matches!(
            store.get_user_by_index(0),
            Err(CoreError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn index_is_position_not_id() {
        let store = InMemoryUserStore::with_users(vec![User::new(10, "A", "B")]);
        assert_eq!(store.get_user_by_index(0).unwrap().id, 10);
        assert!(store.get_user_by_index(10).is_err());
    }

    #[test]
    fn snapshot_does_not_alias_store() {
        let store = InMemoryUserStore::seeded();
        let mut snapshot = store.get_users();
        snapshot.clear();
        snapshot.push(ali());
        assert_eq!(store.len(), 3);
        assert_eq!(store.get_users(), default_users());
    }
}
