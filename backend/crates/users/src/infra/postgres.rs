//! PostgreSQL Repository Implementations
//!
//! Expects the `users` and `posts` tables described in `database/schema.sql`.

use crate::domain::entities::{NewPost, NewUser, Post, User, UserChanges};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::StoreResult;
use kernel::id::{PostId, UserId};
use sqlx::PgPool;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUsersRepository {
    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_user())
    }

    async fn get(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn get_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn get_user_posts(&self, user_id: UserId) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT p.id, p.text, p.user_id
            FROM posts AS p
            WHERE p.user_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> StoreResult<u64> {
        let updated = sqlx::query("UPDATE users SET name = $2 WHERE id = $1")
            .bind(id.value())
            .bind(&changes.name)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated)
    }

    async fn remove(&self, id: UserId) -> StoreResult<u64> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl PostRepository for PgUsersRepository {
    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (text, user_id)
            VALUES ($1, $2)
            RETURNING id, text, user_id
            "#,
        )
        .bind(&post.text)
        .bind(post.user_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    text: String,
    user_id: i64,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::new(self.id),
            text: self.text,
            user_id: UserId::new(self.user_id),
        }
    }
}
