//! 用户处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
};

use super::{
    model::{NewUser, User},
    service::UserService,
};
use crate::core::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// GET /user/:name
pub async fn get_user_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.get_user_by_name(&name).await?;
    Ok(Json(user))
}

/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// POST /user
///
/// 请求体按 JSON 解析，不检查 Content-Type。
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let new_user: NewUser = serde_json::from_slice(&body)?;
    let user = state.user_service.create_user(&new_user).await?;
    Ok(Json(user))
}
