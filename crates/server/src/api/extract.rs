//! 请求提取器。拒绝时统一返回 JSON 形式的 [`ApiError`]。

use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Multipart, Path, Query, Request},
    http::{header, request::Parts},
};
use filehost_api_types::{FileBody, ListQuery};
use filehost_storage::StorageError;

use super::error::ApiError;

/// `{*file_path}` 参数，已去掉首尾斜杠。
///
/// 去掉斜杠后为空（如 `/file//`）时视为路径不存在，根目录本身不通过 HTTP 暴露。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(pub String);

impl<S> FromRequestParts<S> for FilePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(file_path) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::invalid_path(rejection.body_text()))?;

        let relative = file_path.trim_matches('/');
        if relative.is_empty() {
            return Err(StorageError::NotFound("/".to_string()).into());
        }
        Ok(Self(relative.to_string()))
    }
}

/// 目录读取的查询参数。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams(pub ListQuery);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::invalid_query(rejection.body_text()))?;
        Ok(Self(query))
    }
}

/// 请求体中的 `file` 字段。
///
/// 按 `Content-Type` 选择解析方式：`application/json`、`multipart/form-data`，
/// 其余按 urlencoded 表单处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent(pub String);

impl<S> FromRequest<S> for FileContent
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<FileBody>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;
            Ok(Self(body.file))
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;
            read_multipart_file(multipart).await.map(Self)
        } else {
            let Form(body) = Form::<FileBody>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;
            Ok(Self(body.file))
        }
    }
}

/// 读取 multipart 中名为 `file` 的字段，其余字段忽略。
async fn read_multipart_file(mut multipart: Multipart) -> Result<String, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::invalid_body(err.body_text()))?
    {
        if field.name() == Some("file") {
            return field
                .text()
                .await
                .map_err(|err| ApiError::invalid_body(err.body_text()));
        }
    }
    Err(ApiError::invalid_body("missing field `file`"))
}
