//! 持久化SDK抽象接口
//!
//! 核心只依赖接口，不依赖任何具体实现。SDK在远端存储变化时
//! 推送完整快照；核心不假设创建操作能同步拿到后端标识，
//! 后端标识只从后续推送的快照中获知。

use std::sync::Arc;

use neuro_core::{DetectionRecord, Result};

/// 快照回调
///
/// 可能被调用零次或多次，包括在`init`期间立即回调。
/// 每次推送都是权威的整体替换，处理方不得做合并。
#[async_trait::async_trait]
pub trait SnapshotHandler: Send + Sync {
    /// 处理一份完整快照
    async fn on_data_changed(&self, records: Vec<DetectionRecord>);
}

/// 持久化SDK接口
#[async_trait::async_trait]
pub trait DataSdk: Send + Sync {
    /// 注册快照回调并完成初始化
    async fn init(&self, handler: Arc<dyn SnapshotHandler>) -> Result<()>;

    /// 异步持久化一条新记录
    ///
    /// 成功与否都不直接改动本地状态，新记录（含分配的后端标识）
    /// 通过下一次快照推送到达。
    async fn create(&self, record: &DetectionRecord) -> Result<()>;

    /// 按后端标识异步删除一条记录
    async fn delete(&self, record: &DetectionRecord) -> Result<()>;
}
