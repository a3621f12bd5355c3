//! 应用层

pub mod user;

use axum::Router;

use crate::infrastructure::config::CorsConfig;
use user::{handler::AppState, routes::create_routes, service::UserService};

/// 组装完整应用
pub fn create_app(user_service: UserService, cors: &CorsConfig) -> Router {
    create_routes(AppState { user_service }, cors)
}
