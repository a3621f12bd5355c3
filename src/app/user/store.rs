//! 用户存储端口

use async_trait::async_trait;

use super::model::{NewUser, User};

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("用户不存在")]
    NotFound,
    #[error("存储操作失败: {0}")]
    Failure(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Failure(other),
        }
    }
}

/// 用户表的 CRUD 访问
///
/// 实现需要自行保证并发写入安全，调用方不做额外加锁。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 创建 `users` 表（已存在时跳过）
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// 插入一行并返回带有新 id 的记录
    async fn create(&self, new_user: &NewUser) -> Result<User, StoreError>;

    /// 按名字查找，名字重复时返回 id 最小的一行
    async fn get_by_name(&self, name: &str) -> Result<User, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<User, StoreError>;

    /// 按 id 升序返回全部用户
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;
}
