//! 变更协调器
//!
//! 把用户发起的保存/删除包装成带单飞保护的外部调用：
//! 调用期间禁用对应触发控件，结束后无条件恢复；
//! 成败都转换为瞬态通知，本地状态从不做乐观变更，
//! 一切以下一次推送的快照为准。

use std::sync::Arc;

use neuro_core::{
    DetectionDraft, DetectionRecord, NeuroError, PatientForm, Result, MAX_RECORDS,
};
use neuro_store::SharedRecordStore;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::data_sdk::DataSdk;
use crate::guard::ControlGuard;
use crate::notify::{Notifier, ToastLevel};

/// 变更协调器
///
/// 检测草稿和待删除记录不再是环境全局量，而是由协调器显式持有，
/// 随应用启动创建、会话结束销毁。
pub struct MutationCoordinator {
    store: SharedRecordStore,
    sdk: Arc<dyn DataSdk>,
    notifier: Arc<dyn Notifier>,
    draft: RwLock<Option<DetectionDraft>>,
    pending_delete: RwLock<Option<DetectionRecord>>,
    save_control: ControlGuard,
    delete_control: ControlGuard,
}

impl MutationCoordinator {
    /// 创建新的协调器
    pub fn new(
        store: SharedRecordStore,
        sdk: Arc<dyn DataSdk>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            sdk,
            notifier,
            draft: RwLock::new(None),
            pending_delete: RwLock::new(None),
            save_control: ControlGuard::new(),
            delete_control: ControlGuard::new(),
        }
    }

    /// 记录一次分析产生的检测草稿
    pub async fn set_draft(&self, draft: DetectionDraft) {
        *self.draft.write().await = Some(draft);
    }

    /// 当前检测草稿
    pub async fn current_draft(&self) -> Option<DetectionDraft> {
        self.draft.read().await.clone()
    }

    /// 保存当前检测草稿
    ///
    /// 容量已满时直接拒绝，不触碰持久化SDK；保存成功后清空草稿
    /// （上传界面复位），失败则保留草稿供用户重试。
    pub async fn save(&self, form: PatientForm) -> Result<()> {
        if !self.save_control.try_begin() {
            return Err(NeuroError::OperationInFlight("save".to_string()));
        }
        let result = self.save_inner(form).await;
        self.save_control.finish();
        result
    }

    async fn save_inner(&self, form: PatientForm) -> Result<()> {
        let draft = match self.current_draft().await {
            Some(draft) => draft,
            None => return Err(NeuroError::Validation("没有待保存的检测结果".to_string())),
        };

        if self.store.read().await.is_at_capacity() {
            self.notifier
                .notify(ToastLevel::Error, "Maximum record limit reached (999)");
            return Err(NeuroError::CapacityExceeded { limit: MAX_RECORDS });
        }

        let record = DetectionRecord::from_draft(&draft, form);
        info!(
            "Saving detection record {} for patient {}",
            record.id, record.patient_id
        );

        match self.sdk.create(&record).await {
            Ok(()) => {
                self.notifier.notify(ToastLevel::Success, "Detection saved");
                // 保存成功，上传/审阅界面复位
                *self.draft.write().await = None;
                Ok(())
            }
            Err(e) => {
                warn!("Create failed for record {}: {}", record.id, e);
                self.notifier
                    .notify(ToastLevel::Error, "Failed to save detection");
                Err(NeuroError::CreateFailed(e.to_string()))
            }
        }
    }

    /// 发起删除：按后端标识查找记录并打开确认
    pub async fn request_delete(&self, backend_id: &str) -> Result<()> {
        let record = self
            .store
            .read()
            .await
            .find_by_backend_id(backend_id)
            .cloned()
            .ok_or_else(|| NeuroError::NotFound(format!("记录 {} 不存在", backend_id)))?;

        *self.pending_delete.write().await = Some(record);
        Ok(())
    }

    /// 直接暂存一条待删除记录（调用方已持有记录时使用）
    pub async fn stage_delete(&self, record: DetectionRecord) {
        *self.pending_delete.write().await = Some(record);
    }

    /// 当前待确认删除的记录
    pub async fn pending_delete(&self) -> Option<DetectionRecord> {
        self.pending_delete.read().await.clone()
    }

    /// 取消删除，关闭确认
    pub async fn cancel_delete(&self) {
        *self.pending_delete.write().await = None;
    }

    /// 确认并执行删除
    ///
    /// 没有后端标识的记录远端尚不存在，直接拒绝；失败时记录保留在
    /// 存储中，移除只会由下一次快照推送完成。无论成败，确认控件
    /// 恢复可用并关闭确认。
    pub async fn confirm_delete(&self) -> Result<()> {
        if !self.delete_control.try_begin() {
            return Err(NeuroError::OperationInFlight("delete".to_string()));
        }
        let result = self.delete_inner().await;
        self.delete_control.finish();
        *self.pending_delete.write().await = None;
        result
    }

    async fn delete_inner(&self) -> Result<()> {
        let record = match self.pending_delete().await {
            Some(record) => record,
            None => return Err(NeuroError::NotFound("没有待删除的记录".to_string())),
        };

        if !record.has_backend_id() {
            return Err(NeuroError::MissingBackendId(record.id));
        }

        info!("Deleting record {}", record.id);
        match self.sdk.delete(&record).await {
            Ok(()) => {
                self.notifier
                    .notify(ToastLevel::Success, "Record deleted successfully");
                Ok(())
            }
            Err(e) => {
                warn!("Delete failed for record {}: {}", record.id, e);
                self.notifier
                    .notify(ToastLevel::Error, "Failed to delete record");
                Err(NeuroError::DeleteFailed(e.to_string()))
            }
        }
    }

    /// 保存控件是否被禁用
    pub fn save_disabled(&self) -> bool {
        self.save_control.is_disabled()
    }

    /// 删除确认控件是否被禁用
    pub fn delete_disabled(&self) -> bool {
        self.delete_control.is_disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{init_sync, SharedListView, StoreSyncHandler};
    use crate::memory::InMemoryDataSdk;
    use crate::notify::MemoryNotifier;
    use neuro_core::DetectionResult;
    use neuro_store::RecordStore;
    use neuro_view::PlainTextView;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct Harness {
        store: SharedRecordStore,
        view: SharedListView,
        sdk: Arc<InMemoryDataSdk>,
        notifier: Arc<MemoryNotifier>,
        coordinator: Arc<MutationCoordinator>,
    }

    async fn harness() -> Harness {
        let store = RecordStore::shared();
        let view: SharedListView = Arc::new(tokio::sync::Mutex::new(PlainTextView::new()));
        let sdk = Arc::new(InMemoryDataSdk::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let sdk_dyn: Arc<dyn DataSdk> = sdk.clone();
        let notifier_dyn: Arc<dyn Notifier> = notifier.clone();
        let coordinator = Arc::new(MutationCoordinator::new(
            store.clone(),
            sdk_dyn.clone(),
            notifier_dyn,
        ));

        let handler = Arc::new(StoreSyncHandler::new(store.clone(), view.clone()));
        assert!(init_sync(&sdk_dyn, handler).await);

        Harness {
            store,
            view,
            sdk,
            notifier,
            coordinator,
        }
    }

    fn draft(detected: bool) -> DetectionDraft {
        DetectionDraft {
            detected,
            confidence: 92.0,
            location: "Posterior Fossa".to_string(),
            size: "12mm x 10mm".to_string(),
        }
    }

    fn form(name: &str) -> PatientForm {
        PatientForm {
            patient_name: name.to_string(),
            ..Default::default()
        }
    }

    fn capacity_records() -> Vec<DetectionRecord> {
        (0..MAX_RECORDS)
            .map(|_| DetectionRecord::from_draft(&draft(false), PatientForm::default()))
            .collect()
    }

    #[tokio::test]
    async fn test_save_roundtrip() {
        let h = harness().await;
        h.coordinator.set_draft(draft(true)).await;

        h.coordinator.save(form("Alice")).await.unwrap();

        // 快照推送回来后存储中的记录已带后端标识
        let store = h.store.read().await;
        assert_eq!(store.count(), 1);
        assert_eq!(store.positive_count(), 1);
        assert!(store.records()[0].has_backend_id());
        drop(store);

        let view = h.view.lock().await;
        assert_eq!(view.existing_keys().len(), 1);
        drop(view);

        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Success, "Detection saved".to_string()))
        );
        // 保存成功后草稿清空（上传界面复位）
        assert!(h.coordinator.current_draft().await.is_none());
        assert!(!h.coordinator.save_disabled());
    }

    #[tokio::test]
    async fn test_save_without_draft_rejected() {
        let h = harness().await;
        let result = h.coordinator.save(form("Alice")).await;

        assert!(matches!(result, Err(NeuroError::Validation(_))));
        assert_eq!(h.sdk.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_save_failure_preserves_draft() {
        let h = harness().await;
        h.sdk.set_fail_create(true);
        h.coordinator.set_draft(draft(true)).await;

        let result = h.coordinator.save(form("Alice")).await;

        assert!(matches!(result, Err(NeuroError::CreateFailed(_))));
        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Error, "Failed to save detection".to_string()))
        );
        // 草稿保留，用户可以重试
        assert!(h.coordinator.current_draft().await.is_some());
        assert_eq!(h.store.read().await.count(), 0);
        assert!(!h.coordinator.save_disabled());
    }

    #[tokio::test]
    async fn test_save_at_capacity_never_calls_sdk() {
        let h = harness().await;
        h.store.write().await.replace_all(capacity_records());
        h.coordinator.set_draft(draft(true)).await;

        let result = h.coordinator.save(form("Alice")).await;

        assert!(matches!(
            result,
            Err(NeuroError::CapacityExceeded { limit: MAX_RECORDS })
        ));
        assert_eq!(h.sdk.create_calls(), 0);
        assert_eq!(
            h.notifier.last(),
            Some((
                ToastLevel::Error,
                "Maximum record limit reached (999)".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_delete_roundtrip() {
        let h = harness().await;
        h.coordinator.set_draft(draft(true)).await;
        h.coordinator.save(form("Alice")).await.unwrap();

        let backend_id = h.store.read().await.records()[0]
            .backend_id
            .clone()
            .unwrap();

        h.coordinator.request_delete(&backend_id).await.unwrap();
        assert!(h.coordinator.pending_delete().await.is_some());

        h.coordinator.confirm_delete().await.unwrap();

        assert_eq!(h.store.read().await.count(), 0);
        assert!(h.coordinator.pending_delete().await.is_none());
        assert_eq!(
            h.notifier.last(),
            Some((ToastLevel::Success, "Record deleted successfully".to_string()))
        );
        // 确认后视图回到空状态
        let view = h.view.lock().await;
        assert!(view.existing_keys().is_empty());
    }

    #[tokio::test]
    async fn test_request_delete_unknown_backend_id() {
        let h = harness().await;
        let result = h.coordinator.request_delete("b-missing").await;

        assert!(matches!(result, Err(NeuroError::NotFound(_))));
        assert!(h.coordinator.pending_delete().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_without_backend_id_rejected() {
        let h = harness().await;
        let unconfirmed = DetectionRecord::from_draft(&draft(true), PatientForm::default());
        h.coordinator.stage_delete(unconfirmed).await;

        let result = h.coordinator.confirm_delete().await;

        assert!(matches!(result, Err(NeuroError::MissingBackendId(_))));
        assert_eq!(h.sdk.delete_calls(), 0);
        // 确认无论成败都关闭
        assert!(h.coordinator.pending_delete().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_record() {
        let h = harness().await;
        h.coordinator.set_draft(draft(true)).await;
        h.coordinator.save(form("Alice")).await.unwrap();
        let backend_id = h.store.read().await.records()[0]
            .backend_id
            .clone()
            .unwrap();

        h.sdk.set_fail_delete(true);
        h.coordinator.request_delete(&backend_id).await.unwrap();
        let result = h.coordinator.confirm_delete().await;

        assert!(matches!(result, Err(NeuroError::DeleteFailed(_))));
        // 不做乐观移除，记录仍在存储中
        assert_eq!(h.store.read().await.count(), 1);
        assert!(!h.coordinator.delete_disabled());
    }

    #[tokio::test]
    async fn test_cancel_delete_closes_confirmation() {
        let h = harness().await;
        h.coordinator.set_draft(draft(true)).await;
        h.coordinator.save(form("Alice")).await.unwrap();
        let backend_id = h.store.read().await.records()[0]
            .backend_id
            .clone()
            .unwrap();

        h.coordinator.request_delete(&backend_id).await.unwrap();
        h.coordinator.cancel_delete().await;

        assert!(h.coordinator.pending_delete().await.is_none());
        assert_eq!(h.sdk.delete_calls(), 0);
    }

    /// 删除调用在放行前一直挂起，用于制造在途状态
    struct BlockingSdk {
        gate: Notify,
        delete_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DataSdk for BlockingSdk {
        async fn init(&self, _handler: Arc<dyn crate::data_sdk::SnapshotHandler>) -> Result<()> {
            Ok(())
        }

        async fn create(&self, _record: &DetectionRecord) -> Result<()> {
            Ok(())
        }

        async fn delete(&self, _record: &DetectionRecord) -> Result<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rapid_double_delete_blocked_by_guard() {
        let store = RecordStore::shared();
        let sdk = Arc::new(BlockingSdk {
            gate: Notify::new(),
            delete_calls: AtomicUsize::new(0),
        });
        let notifier = Arc::new(MemoryNotifier::new());
        let sdk_dyn: Arc<dyn DataSdk> = sdk.clone();
        let notifier_dyn: Arc<dyn Notifier> = notifier;
        let coordinator = Arc::new(MutationCoordinator::new(store.clone(), sdk_dyn, notifier_dyn));

        let mut record = DetectionRecord::from_draft(&draft(true), PatientForm::default());
        record.backend_id = Some("b-1".to_string());
        store.write().await.replace_all(vec![record]);

        coordinator.request_delete("b-1").await.unwrap();

        let first = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move { coordinator.confirm_delete().await })
        };

        // 等第一次删除进入在途状态
        while sdk.delete_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(coordinator.delete_disabled());

        // 第一次未完成前，第二次确认被禁用的控件挡住
        let second = coordinator.confirm_delete().await;
        assert!(matches!(second, Err(NeuroError::OperationInFlight(_))));

        sdk.gate.notify_one();
        first.await.unwrap().unwrap();

        assert_eq!(sdk.delete_calls.load(Ordering::SeqCst), 1);
        assert!(!coordinator.delete_disabled());
    }

    #[tokio::test]
    async fn test_save_allowed_while_unrelated_delete_pending() {
        let h = harness().await;
        h.coordinator.set_draft(draft(false)).await;
        h.coordinator.save(form("Alice")).await.unwrap();
        let backend_id = h.store.read().await.records()[0]
            .backend_id
            .clone()
            .unwrap();

        // 删除确认打开期间，另一条记录的保存不受影响
        h.coordinator.request_delete(&backend_id).await.unwrap();
        h.coordinator.set_draft(draft(true)).await;
        h.coordinator.save(form("Bob")).await.unwrap();

        assert_eq!(h.store.read().await.count(), 2);
        assert_eq!(
            h.store
                .read()
                .await
                .count_where(|r| r.detection_result == DetectionResult::Positive),
            1
        );
    }
}
