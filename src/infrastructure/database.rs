//! 数据库基础设施

use sqlx::{
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Error,
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;

use super::config::DatabaseConfig;
use super::persistence::{PgUserStore, SqliteUserStore};
use crate::app::user::store::UserStore;

/// 由连接串判定的数据库类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Postgres,
    Sqlite,
}

impl DatabaseKind {
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

pub struct DatabaseManager {
    kind: DatabaseKind,
    store: Arc<dyn UserStore>,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let kind = DatabaseKind::from_url(&config.url).ok_or_else(|| {
            let message = format!("unsupported database url: {}", mask_password(&config.url));
            Error::Configuration(message.into())
        })?;

        info!("Connecting to database: {}", mask_password(&config.url));

        let store: Arc<dyn UserStore> = match kind {
            DatabaseKind::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(Duration::from_secs(8))
                    .connect(&config.url)
                    .await?;
                Arc::new(PgUserStore::new(pool))
            }
            DatabaseKind::Sqlite => {
                let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
                let pool = if is_memory_url(&config.url) {
                    // 内存库随连接销毁，必须固定在单个连接上
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                        .connect_with(options)
                        .await?
                } else {
                    SqlitePoolOptions::new()
                        .max_connections(config.max_connections)
                        .connect_with(options)
                        .await?
                };
                Arc::new(SqliteUserStore::new(pool))
            }
        };

        Ok(Self { kind, store })
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    pub fn store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.store)
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// 隐藏连接串中的密码，用于日志输出
///
/// 无法解析的连接串整体隐藏，避免泄露。
pub fn mask_password(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return "***".to_string();
    };
    if parsed.password().is_none() {
        return raw.to_string();
    }
    match parsed.set_password(Some("***")) {
        Ok(()) => parsed.to_string(),
        Err(()) => "***".to_string(),
    }
}
