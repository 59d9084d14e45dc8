//! User entity representing a registered user of the marketplace.

use serde::{Deserialize, Serialize};

/// User entity. Users both list items and book items listed by others;
/// the distinction between owner and booker exists only relative to a
/// concrete item or booking, never on the user itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,

    /// Display name
    pub name: String,

    /// E-mail address, unique across all users
    pub email: String,
}

impl User {
    /// Creates a new User instance; the id is assigned by the repository
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("Alice", "alice@example.com");
        assert_eq!(user.id, 0);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
    }
}
