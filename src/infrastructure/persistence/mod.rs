//! 用户存储的数据库实现

pub mod postgres;
pub mod sqlite;

pub use postgres::PgUserStore;
pub use sqlite::SqliteUserStore;
