//! In-memory Repository
//!
//! Used when no database is configured, and by tests. Ids come from
//! per-table sequences under the write lock, so concurrent inserts never
//! share an id.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{NewPost, NewUser, Post, User, UserChanges};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::StoreResult;
use kernel::id::{PostId, UserId};

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    posts: BTreeMap<PostId, Post>,
    last_user_id: i64,
    last_post_id: i64,
}

/// Process-local store; clones share the same tables
#[derive(Clone, Default)]
pub struct InMemoryUsersRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUsersRepository {
    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        tables.last_user_id += 1;
        let user = User {
            id: UserId::new(tables.last_user_id),
            name: user.name,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self) -> StoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn get_user_posts(&self, user_id: UserId) -> StoreResult<Vec<Post>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&id) {
            Some(user) => {
                changes.apply(user);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: UserId) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        Ok(u64::from(tables.users.remove(&id).is_some()))
    }
}

impl PostRepository for InMemoryUsersRepository {
    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        let mut tables = self.tables.write().await;
        tables.last_post_id += 1;
        let post = Post {
            id: PostId::new(tables.last_post_id),
            text: post.text,
            user_id: post.user_id,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryUsersRepository::new();
        let a = UserRepository::insert(&repo, new_user("Alice")).await.unwrap();
        let b = UserRepository::insert(&repo, new_user("Bob")).await.unwrap();
        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
        assert_eq!(repo.get().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_update_and_remove_report_affected_rows() {
        let repo = InMemoryUsersRepository::new();
        let user = UserRepository::insert(&repo, new_user("Alice")).await.unwrap();

        let changes = UserChanges {
            name: "Bob".to_string(),
        };
        assert_eq!(repo.update(user.id, changes.clone()).await.unwrap(), 1);
        assert_eq!(repo.update(UserId::new(99), changes).await.unwrap(), 0);
        assert_eq!(repo.get_by_id(user.id).await.unwrap().unwrap().name, "Bob");

        assert_eq!(repo.remove(user.id).await.unwrap(), 1);
        assert_eq!(repo.remove(user.id).await.unwrap(), 0);
        assert!(repo.get_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_posts_filtered_by_owner_and_kept_after_owner_removed() {
        let repo = InMemoryUsersRepository::new();
        let alice = UserRepository::insert(&repo, new_user("Alice")).await.unwrap();
        let bob = UserRepository::insert(&repo, new_user("Bob")).await.unwrap();

        for (text, owner) in [("a1", alice.id), ("b1", bob.id), ("a2", alice.id)] {
            PostRepository::insert(
                &repo,
                NewPost {
                    text: text.to_string(),
                    user_id: owner,
                },
            )
            .await
            .unwrap();
        }

        let texts: Vec<_> = repo
            .get_user_posts(alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(texts, vec!["a1", "a2"]);

        repo.remove(alice.id).await.unwrap();
        assert_eq!(repo.get_user_posts(alice.id).await.unwrap().len(), 2);
    }
}
