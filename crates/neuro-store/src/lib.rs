//! # NeuroLocus Store
//!
//! 检测记录的内存存储。渲染所见内容的唯一事实来源，
//! 由持久化SDK推送的快照整体替换。

pub mod store;

pub use store::{RecordStore, SharedRecordStore, StoreStats};
