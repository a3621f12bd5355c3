//! 用户业务服务

use std::sync::Arc;
use tracing::{debug, info};

use super::model::{NewUser, User};
use super::store::{StoreError, UserStore};

/// 启动时写入的默认用户
pub const DEFAULT_USER_NAME: &str = "a8m";
pub const DEFAULT_USER_AGE: i32 = 30;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 建表，并在需要时写入默认用户
    pub async fn prepare(&self, seed_default_user: bool) -> Result<(), StoreError> {
        info!("Creating database tables...");
        self.store.ensure_schema().await?;

        if seed_default_user {
            self.seed_default_user().await?;
        }

        Ok(())
    }

    /// 仅在表为空时写入默认用户，返回是否写入
    pub async fn seed_default_user(&self) -> Result<bool, StoreError> {
        if !self.store.list_all().await?.is_empty() {
            info!("Database already contains data, skipping seed");
            return Ok(false);
        }

        let user = self
            .store
            .create(&NewUser::new(DEFAULT_USER_NAME, DEFAULT_USER_AGE))
            .await?;
        info!("Seeded default user: {} ({})", user.name, user.id);
        Ok(true)
    }

    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let user = self.store.create(new_user).await?;
        info!("Created user: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<User, StoreError> {
        let user = self.store.get_by_name(name).await?;
        debug!("User returned: {:?}", user);
        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, StoreError> {
        let user = self.store.get_by_id(id).await?;
        debug!("User returned: {:?}", user);
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::SqliteUserStore;

    async fn test_service() -> UserService {
        let store = SqliteUserStore::in_memory().await.unwrap();
        UserService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_prepare_seeds_empty_table() {
        let service = test_service().await;
        service.prepare(true).await.unwrap();

        let user = service.get_user_by_name(DEFAULT_USER_NAME).await.unwrap();
        assert_eq!(user.age, DEFAULT_USER_AGE);
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_table() {
        let service = test_service().await;
        service.create_user(&NewUser::new("neo", 41)).await.unwrap();

        assert!(!service.seed_default_user().await.unwrap());
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_prepare_without_seed_leaves_table_empty() {
        let service = test_service().await;
        service.prepare(false).await.unwrap();
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_fetch_by_id() {
        let service = test_service().await;
        let created = service.create_user(&NewUser::new("trinity", 29)).await.unwrap();

        let fetched = service.get_user_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "trinity");
        assert_eq!(fetched.age, 29);
    }
}
