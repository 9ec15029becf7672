//! 记录存储
//!
//! 持有权威的有序检测记录序列，支持整体原子替换和派生统计查询。

use std::sync::Arc;

use neuro_core::{DetectionRecord, MAX_RECORDS};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// 共享的记录存储句柄
///
/// 单线程事件模型下无需更强的锁纪律；RwLock仅用于在异步任务间传递。
pub type SharedRecordStore = Arc<RwLock<RecordStore>>;

/// 存储统计信息
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreStats {
    pub total_scans: usize,
    pub positive_detections: usize,
}

/// 记录存储
///
/// 纯内存结构，没有错误路径；所有失败处理都在变更协调器一侧。
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<DetectionRecord>,
}

impl RecordStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// 创建共享句柄
    pub fn shared() -> SharedRecordStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// 用新快照整体替换存储内容
    ///
    /// 持久化SDK始终推送完整快照，因此不存在部分更新的变体；
    /// 最后应用的快照总是胜出。
    pub fn replace_all(&mut self, records: Vec<DetectionRecord>) {
        tracing::debug!(
            "Replacing store contents: {} -> {} records",
            self.records.len(),
            records.len()
        );
        self.records = records;
    }

    /// 按存储顺序返回全部记录
    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    /// 记录总数
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// 满足谓词的记录数
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&DetectionRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).count()
    }

    /// 阳性记录数
    pub fn positive_count(&self) -> usize {
        self.count_where(|r| r.detection_result.is_positive())
    }

    /// 存储是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 是否已达容量上限
    pub fn is_at_capacity(&self) -> bool {
        self.records.len() >= MAX_RECORDS
    }

    /// 按后端标识查找记录
    pub fn find_by_backend_id(&self, backend_id: &str) -> Option<&DetectionRecord> {
        self.records
            .iter()
            .find(|r| r.backend_id.as_deref() == Some(backend_id))
    }

    /// 统计面板所需的聚合数据
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_scans: self.records.len(),
            positive_detections: self.positive_count(),
        }
    }
}
