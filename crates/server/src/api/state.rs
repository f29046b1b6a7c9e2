//! 统一的应用状态。

use filehost_storage::ResourceController;

/// 统一的应用状态，包含所有 handler 共享的数据。
pub struct AppState {
    /// 文件资源控制器。
    pub controller: ResourceController,
}

impl AppState {
    /// 创建新的应用状态。
    pub fn new(controller: ResourceController) -> Self {
        Self { controller }
    }
}
