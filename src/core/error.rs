//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::app::user::store::StoreError;

/// 接口错误类型，对外只暴露固定的错误信息
///
/// 除 `BadInput` 外，存储层错误（包括查无此人）一律返回 500。
#[derive(Debug)]
pub enum ApiError {
    /// 请求体不是合法的 JSON
    BadInput(serde_json::Error),
    NotFound,
    StoreFailure(sqlx::Error),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadInput(_) => "Invalid JSON input",
            ApiError::NotFound | ApiError::StoreFailure(_) => "Internal server error",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Failure(e) => ApiError::StoreFailure(e),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadInput(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StoreFailure(e) => error!("Database error: {}", e),
            ApiError::NotFound => warn!("User lookup matched no rows"),
            ApiError::BadInput(e) => warn!("Invalid JSON input: {}", e),
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
