//! SQLite 用户存储

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::app::user::{
    model::{NewUser, User},
    store::{StoreError, UserStore},
};

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 基于内存数据库的存储
    ///
    /// 内存库只存活于单个连接内，因此连接池固定为一个永不回收的连接。
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, age) VALUES (?, ?) RETURNING id, name, age",
        )
        .bind(&new_user.name)
        .bind(new_user.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_name(&self, name: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, age FROM users WHERE name = ? ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, age FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = SqliteUserStore::in_memory().await.unwrap();

        let first = store.create(&NewUser::new("a8m", 30)).await.unwrap();
        let second = store.create(&NewUser::new("neo", 41)).await.unwrap();

        assert_eq!(first, User { id: 1, name: "a8m".to_string(), age: 30 });
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_then_get_by_id() {
        let store = SqliteUserStore::in_memory().await.unwrap();

        let created = store.create(&NewUser::new("a8m", 30)).await.unwrap();
        let fetched = store.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let store = SqliteUserStore::in_memory().await.unwrap();

        assert!(matches!(store.get_by_name("ghost").await, Err(StoreError::NotFound)));
        assert!(matches!(store.get_by_id(42).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_names_return_first_row() {
        let store = SqliteUserStore::in_memory().await.unwrap();

        let first = store.create(&NewUser::new("twin", 20)).await.unwrap();
        store.create(&NewUser::new("twin", 21)).await.unwrap();

        let fetched = store.get_by_name("twin").await.unwrap();
        assert_eq!(fetched, first);
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());

        for (name, age) in [("a", 1), ("b", 2), ("c", 3)] {
            store.create(&NewUser::new(name, age)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        store.create(&NewUser::new("a8m", 30)).await.unwrap();

        store.ensure_schema().await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_closed_pool_is_store_failure() {
        let store = SqliteUserStore::in_memory().await.unwrap();
        store.pool().close().await;

        let result = store.create(&NewUser::new("a8m", 30)).await;
        assert!(matches!(result, Err(StoreError::Failure(_))));
    }
}
