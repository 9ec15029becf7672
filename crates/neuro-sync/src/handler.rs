//! 快照应用
//!
//! 把SDK推送的完整快照落到共享存储，并驱动协调器刷新视图。

use std::sync::Arc;

use neuro_core::DetectionRecord;
use neuro_store::SharedRecordStore;
use neuro_view::{reconcile, ListView};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::data_sdk::{DataSdk, SnapshotHandler};

/// 共享的视图句柄
pub type SharedListView = Arc<Mutex<dyn ListView + Send>>;

/// 把快照同步到存储与视图的标准处理器
pub struct StoreSyncHandler {
    store: SharedRecordStore,
    view: SharedListView,
}

impl StoreSyncHandler {
    pub fn new(store: SharedRecordStore, view: SharedListView) -> Self {
        Self { store, view }
    }
}

#[async_trait::async_trait]
impl SnapshotHandler for StoreSyncHandler {
    async fn on_data_changed(&self, records: Vec<DetectionRecord>) {
        // 整体替换，最后应用的快照胜出；无论推送以何种顺序交错到达，
        // 协调都基于替换后的完整内容，不会损坏状态
        let mut store = self.store.write().await;
        store.replace_all(records);
        let stats = store.stats();

        let mut view = self.view.lock().await;
        reconcile(&mut *view, store.records());

        info!(
            "Snapshot applied: {} records, {} positive",
            stats.total_scans, stats.positive_detections
        );
    }
}

/// 初始化持久化SDK
///
/// 失败时记录日志并以降级（无同步）模式继续运行，返回同步是否生效。
pub async fn init_sync(sdk: &Arc<dyn DataSdk>, handler: Arc<dyn SnapshotHandler>) -> bool {
    match sdk.init(handler).await {
        Ok(()) => {
            info!("Persistence SDK initialized");
            true
        }
        Err(e) => {
            error!("Failed to initialize persistence SDK, running degraded: {}", e);
            false
        }
    }
}
