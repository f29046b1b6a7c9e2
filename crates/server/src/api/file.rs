//! 文件资源 API 路由。
//!
//! `/file/{file_path}/` 上的 GET/POST/PATCH/DELETE 分别对应读取、创建、覆盖、删除。

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use filehost_api_types::{DirectoryListing, INDEX_GREETING, MessageResponse};
use filehost_core::ListOptions;
use filehost_storage::Resource;
use std::sync::Arc;

use super::error::ApiError;
use super::extract::{FileContent, FilePath, ListParams};
use super::state::AppState;

/// 创建文件资源 API 路由。
pub fn create_file_router() -> Router<Arc<AppState>> {
    Router::new()
        // 存活探针
        .route("/file", get(index))
        .route("/file/", get(index))
        // 文件资源
        .route(
            "/file/{*file_path}",
            get(read_resource)
                .post(create_file)
                .patch(update_file)
                .delete(delete_file),
        )
}

/// 存活探针，返回固定问候语。
async fn index() -> Json<&'static str> {
    Json(INDEX_GREETING)
}

/// 读取目录列表或文件内容。
async fn read_resource(
    State(state): State<Arc<AppState>>,
    FilePath(file_path): FilePath,
    ListParams(query): ListParams,
) -> Result<Response, ApiError> {
    let options = ListOptions::from_raw(
        query.filter_by_name.as_deref(),
        query.order_by.as_deref(),
        query.order_by_direction.as_deref(),
    )?;

    let response = match state.controller.read(&file_path, &options).await? {
        Resource::Listing(entries) => {
            let files = entries.into_iter().map(|entry| entry.name).collect();
            Json(DirectoryListing::new(files)).into_response()
        }
        Resource::File(content) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            content,
        )
            .into_response(),
    };
    Ok(response)
}

/// 创建文件。
async fn create_file(
    State(state): State<Arc<AppState>>,
    FilePath(file_path): FilePath,
    FileContent(content): FileContent,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let resolved = state
        .controller
        .create(&file_path, content.as_bytes())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Created file: {}",
            resolved.relative
        ))),
    ))
}

/// 以请求体完整覆盖已有文件。
async fn update_file(
    State(state): State<Arc<AppState>>,
    FilePath(file_path): FilePath,
    FileContent(content): FileContent,
) -> Result<Json<MessageResponse>, ApiError> {
    let resolved = state
        .controller
        .update(&file_path, content.as_bytes())
        .await?;
    Ok(Json(MessageResponse::new(format!(
        "Updated file: {}",
        resolved.relative
    ))))
}

/// 删除文件。
async fn delete_file(
    State(state): State<Arc<AppState>>,
    FilePath(file_path): FilePath,
) -> Result<Json<MessageResponse>, ApiError> {
    let resolved = state.controller.delete(&file_path).await?;
    Ok(Json(MessageResponse::new(format!(
        "Deleted file: {}",
        resolved.relative
    ))))
}
