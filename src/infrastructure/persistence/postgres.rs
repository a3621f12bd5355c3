//! PostgreSQL 用户存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use crate::app::user::{
    model::{NewUser, User},
    store::{StoreError, UserStore},
};

/// 查询列，兼容旧表 `id SERIAL, name TEXT, age INT`（INT4 主键、可空列）
const USER_COLUMNS: &str =
    "id::BIGINT AS id, COALESCE(name, '') AS name, COALESCE(age, 0)::INTEGER AS age";

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
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
        let sql = format!("INSERT INTO users (name, age) VALUES ($1, $2) RETURNING {USER_COLUMNS}");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.name)
            .bind(new_user.age)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    async fn get_by_name(&self, name: &str) -> Result<User, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_id(&self, id: i64) -> Result<User, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}
