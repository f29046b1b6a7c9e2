//! filehost HTTP 服务。

pub mod api;
pub mod config;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use api::AppState;
pub use config::ServerConfig;

/// 组装完整的路由。
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(api::create_file_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
