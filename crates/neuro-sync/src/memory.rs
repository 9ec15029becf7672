//! 内存持久化后端
//!
//! [`DataSdk`]的参考实现：记录保存在进程内，每次成功变更后
//! （以及初始化时）向回调推送完整快照。应用外壳和测试都用它
//! 代替真实的外部SDK。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use neuro_core::{DetectionRecord, NeuroError, Result};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::data_sdk::{DataSdk, SnapshotHandler};

/// 进程内的持久化后端
#[derive(Default)]
pub struct InMemoryDataSdk {
    records: RwLock<Vec<DetectionRecord>>,
    handler: RwLock<Option<Arc<dyn SnapshotHandler>>>,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryDataSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注入创建失败，用于演练降级路径
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::Relaxed);
    }

    /// 注入删除失败
    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::Relaxed);
    }

    /// create被调用的次数
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::Relaxed)
    }

    /// delete被调用的次数
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::Relaxed)
    }

    /// 当前持久化的记录数
    pub async fn stored_count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn push_snapshot(&self) {
        let handler = self.handler.read().await.clone();
        if let Some(handler) = handler {
            let snapshot = self.records.read().await.clone();
            debug!("Pushing snapshot with {} records", snapshot.len());
            handler.on_data_changed(snapshot).await;
        }
    }
}

#[async_trait::async_trait]
impl DataSdk for InMemoryDataSdk {
    async fn init(&self, handler: Arc<dyn SnapshotHandler>) -> Result<()> {
        *self.handler.write().await = Some(handler);
        // 初始化时立即推送一次当前内容
        self.push_snapshot().await;
        Ok(())
    }

    async fn create(&self, record: &DetectionRecord) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_create.load(Ordering::Relaxed) {
            return Err(NeuroError::CreateFailed("injected failure".to_string()));
        }

        let mut stored = record.clone();
        stored.backend_id = Some(format!("b-{}", Uuid::new_v4().simple()));
        self.records.write().await.push(stored);

        self.push_snapshot().await;
        Ok(())
    }

    async fn delete(&self, record: &DetectionRecord) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_delete.load(Ordering::Relaxed) {
            return Err(NeuroError::DeleteFailed("injected failure".to_string()));
        }

        let backend_id = record
            .backend_id
            .as_deref()
            .ok_or_else(|| NeuroError::MissingBackendId(record.id.clone()))?;

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.backend_id.as_deref() != Some(backend_id));
        if records.len() == before {
            return Err(NeuroError::NotFound(format!(
                "backend record {} not found",
                backend_id
            )));
        }
        drop(records);

        self.push_snapshot().await;
        Ok(())
    }
}
