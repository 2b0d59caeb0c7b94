//! Domain Entities
//!
//! Rows as the data store returns them, plus the shapes written to it.

use kernel::id::{PostId, UserId};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Post entity, always owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub text: String,
    pub user_id: UserId,
}

/// User to be inserted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

/// Field replacements for an existing user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: String,
}

impl UserChanges {
    pub fn apply(&self, user: &mut User) {
        user.name.clone_from(&self.name);
    }
}

/// Post to be inserted
///
/// `user_id` always comes from the request path, never from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_replace_name() {
        let mut user = User {
            id: UserId::new(2),
            name: "Alice".to_string(),
        };
        UserChanges {
            name: "Bob".to_string(),
        }
        .apply(&mut user);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.id, UserId::new(2));
    }
}
