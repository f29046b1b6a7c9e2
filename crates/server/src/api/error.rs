//! API 错误与 HTTP 状态码映射。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use filehost_api_types::ErrorResponse;
use filehost_core::DomainError;
use filehost_storage::StorageError;
use tracing::{error, warn};

/// API 错误类型。
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub code: &'static str,
    pub status: StatusCode,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            message,
            code,
            status,
        }
    }

    /// 请求体无法解析。
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_BODY", detail.into())
    }

    /// URL 中的路径参数无法解析。
    pub fn invalid_path(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_PATH", detail.into())
    }

    /// 查询字符串无法解析。
    pub fn invalid_query(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_QUERY", detail.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_PARAMETER", err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(path) => Self::new(
                StatusCode::NOT_FOUND,
                "PATH_NOT_FOUND",
                format!("Path not found: {}", path),
            ),
            StorageError::AlreadyExists(path) => Self::new(
                StatusCode::BAD_REQUEST,
                "ALREADY_EXISTS",
                format!("File already exists: {}", path),
            ),
            StorageError::NotAFile(path) => Self::new(
                StatusCode::BAD_REQUEST,
                "NOT_A_FILE",
                format!("File does not exist: {}", path),
            ),
            StorageError::IsADirectory(path) => Self::new(
                StatusCode::BAD_REQUEST,
                "IS_A_DIRECTORY",
                format!("Path is a directory: {}", path),
            ),
            StorageError::ParentNotFound(path) => Self::new(
                StatusCode::BAD_REQUEST,
                "PARENT_NOT_FOUND",
                format!("Parent directory does not exist: {}", path),
            ),
            StorageError::OutsideRoot(path) => Self::new(
                StatusCode::FORBIDDEN,
                "PATH_OUTSIDE_ROOT",
                format!("Path escapes the served root: {}", path),
            ),
            StorageError::InvalidFilter { pattern, source } => Self::new(
                StatusCode::BAD_REQUEST,
                "INVALID_FILTER",
                format!("Invalid filterByName {}: {}", pattern, source),
            ),
            StorageError::RootUnavailable { root, source } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "ROOT_UNAVAILABLE",
                format!("Root directory unavailable {}: {}", root, source),
            ),
            StorageError::Io(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                format!("IO error: {}", e),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, message = %self.message, "request failed");
        } else {
            warn!(code = self.code, message = %self.message, "request rejected");
        }

        let body = Json(ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
