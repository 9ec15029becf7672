//! # NeuroLocus Sync
//!
//! 记录同步层。定义持久化SDK的抽象接口，接收SDK推送的完整快照并
//! 应用到存储与视图，同时以单飞（single-flight）纪律串行化用户发起的
//! 创建/删除操作。

pub mod coordinator;
pub mod data_sdk;
pub mod guard;
pub mod handler;
pub mod memory;
pub mod notify;

pub use coordinator::MutationCoordinator;
pub use data_sdk::{DataSdk, SnapshotHandler};
pub use guard::ControlGuard;
pub use handler::{init_sync, SharedListView, StoreSyncHandler};
pub use memory::InMemoryDataSdk;
pub use notify::{MemoryNotifier, Notifier, ToastLevel, TracingNotifier};
