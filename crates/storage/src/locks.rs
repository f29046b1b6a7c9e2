//! 按路径串行化写操作的锁表。

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// 绝对路径到互斥锁的映射。
///
/// 同一路径上的“检查后执行”序列在持有守卫期间不会交错。
/// 没有守卫或等待者引用的条目会在下一次获取时被清理。
#[derive(Debug, Default)]
pub struct PathLocks {
    slots: Mutex<HashMap<PathBuf, Arc<AsyncMutex<()>>>>,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取路径对应的锁，守卫释放前同一路径的其他请求会等待。
    pub async fn acquire(&self, path: &Path) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            Arc::clone(slots.entry(path.to_path_buf()).or_default())
        };
        slot.lock_owned().await
    }

    /// 当前登记的路径数量。
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
