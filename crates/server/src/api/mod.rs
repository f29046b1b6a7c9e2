//! API 路由模块。
//!
//! 将根目录下的文件资源以 HTTP 形式暴露。

pub mod error;
pub mod extract;
pub mod file;
pub mod state;

pub use error::ApiError;
pub use file::create_file_router;
pub use state::AppState;
