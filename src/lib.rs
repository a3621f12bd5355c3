//! # 用户服务
//!
//! 基于 Axum + SQLx 的最小用户 CRUD 服务：
//! - `GET /user` 列出全部用户
//! - `GET /user/:name` 按名字查询
//! - `POST /user` 创建用户
//!
//! 存储支持 PostgreSQL 与 SQLite，由配置中的连接串决定。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::create_app;
pub use app::user::model::{NewUser, User};
pub use app::user::service::UserService;
pub use app::user::store::{StoreError, UserStore};
