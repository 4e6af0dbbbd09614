//! Domain library for the user store.
//!
//! Holds the `User` record, the `UserStore` capability trait and the error
//! type. Serde derives are the only external dependency; keep IO and process
//! concerns (config, logging, output) in the hosting binary.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A user record: identifier plus first and last name.
///
/// Identifiers are not required to be unique; callers assign them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new<F: Into<String>, L: Into<String>>(id: i32, first_name: F, last_name: L) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Capability contract of the user store.
///
/// Records are kept in insertion order and are never updated or removed.
pub trait UserStore: Send + Sync {
    /// Append `user` to the end of the sequence and return it unchanged.
    fn add_user(&self, user: User) -> User;

    /// Return the record at a zero-based position in insertion order.
    ///
    /// This is positional access, not an identifier lookup. Fails with
    /// `CoreError::IndexOutOfRange` when `index` is negative or past the end.
    fn get_user_by_index(&self, index: i64) -> Result<User, CoreError>;

    /// Return a snapshot of every record in insertion order.
    fn get_users(&self) -> Vec<User>;

    /// Number of records currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    fn add_user(&self, user: User) -> User {
        (**self).add_user(user)
    }

    fn get_user_by_index(&self, index: i64) -> Result<User, CoreError> {
        (**self).get_user_by_index(index)
    }

    fn get_users(&self) -> Vec<User> {
        (**self).get_users()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Core domain errors (no external error crates to keep deps minimal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Positional access outside `[0, len)`.
    IndexOutOfRange { index: i64, len: usize },
}

impl CoreError {
    /// Stable machine-readable code used in structured output.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::IndexOutOfRange { .. } => "index_out_of_range",
        }
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {} (store holds {} users)", index, len)
            }
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{}", pkg, ver)
}

pub mod adapters;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_new_accepts_any_strings() {
        let u = User::new(7, "", "Ben");
        assert_eq!(u.id, 7);
        assert_eq!(u.first_name, "");
        assert_eq!(u.last_name, "Ben");
    }

    #[test]
    fn user_serializes_camel_case() {
        let u = User::new(1, "Oussama", "Souissi");
        let v = serde_json::to_value(&u).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 1, "firstName": "Oussama", "lastName": "Souissi"})
        );
    }

    #[test]
    fn index_error_display_and_code() {
        let err = CoreError::IndexOutOfRange { index: -1, len: 3 };
        assert_eq!(err.code(), "index_out_of_range");
        assert_eq!(err.to_string(), "index out of range: -1 (store holds 3 users)");
    }
}
