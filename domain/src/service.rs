use crate::{CoreError, User, UserStore};

/// A command or query against the user store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRequest {
    AddUser(User),
    GetUserByIndex(i64),
    GetUsers,
}

/// Result of a handled request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserResponse {
    User(User),
    Users(Vec<User>),
}

/// Application service dispatching requests to an injected store.
///
/// Generic over the store so hosts and tests choose the backing
/// implementation; the service itself holds no state.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Route a request to the matching store operation.
    pub fn handle(&self, request: UserRequest) -> Result<UserResponse, CoreError> {
        match request {
            UserRequest::AddUser(user) => Ok(UserResponse::User(self.store.add_user(user))),
            UserRequest::GetUserByIndex(index) => {
                self.store.get_user_by_index(index).map(UserResponse::User)
            }
            UserRequest::GetUsers => Ok(UserResponse::Users(self.store.get_users())),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_repo::InMemoryUserStore;
    use crate::seed::default_users;

    fn svc() -> UserService<InMemoryUserStore> {
        UserService::new(InMemoryUserStore::seeded())
    }

    #[test]
    fn get_users_returns_seed() {
        let resp = svc().handle(UserRequest::GetUsers).unwrap();
        assert_eq!(resp, UserResponse::Users(default_users()));
    }

    #[test]
    fn add_then_get_by_index() {
        let svc = svc();
        let ali = User::new(4, "Ali", "Ben");
        let resp = svc.handle(UserRequest::AddUser(ali.clone())).unwrap();
        assert_eq!(resp, UserResponse::User(ali.clone()));

        let resp = svc.handle(UserRequest::GetUserByIndex(3)).unwrap();
        assert_eq!(resp, UserResponse::User(ali));
        assert_eq!(svc.store().len(), 4);
    }

    #[test]
    fn get_by_index_propagates_error() {
        let err = svc().handle(UserRequest::GetUserByIndex(-2)).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: -2, len: 3 });
    }

    #[test]
    fn duplicate_adds_are_kept() {
        let svc = svc();
        let dup = User::new(1, "Oussama", "Souissi");
        svc.handle(UserRequest::AddUser(dup.clone())).unwrap();
        svc.handle(UserRequest::AddUser(dup.clone())).unwrap();
        let users = svc.store().get_users();
        assert_eq!(users.len(), 5);
        assert_eq!(users.iter().filter(|u| **u == dup).count(), 3);
    }
}
