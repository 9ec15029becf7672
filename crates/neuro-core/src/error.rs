//! 错误定义模块

use thiserror::Error;

/// NeuroLocus系统统一错误类型
#[derive(Error, Debug)]
pub enum NeuroError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("持久化SDK初始化失败: {0}")]
    PersistenceInit(String),

    #[error("记录创建失败: {0}")]
    CreateFailed(String),

    #[error("记录删除失败: {0}")]
    DeleteFailed(String),

    #[error("记录数已达上限: {limit}")]
    CapacityExceeded { limit: usize },

    #[error("操作进行中，控件已禁用: {0}")]
    OperationInFlight(String),

    #[error("记录缺少后端标识: {0}")]
    MissingBackendId(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("验证错误: {0}")]
    Validation(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("系统内部错误: {0}")]
    Internal(String),
}

/// NeuroLocus系统统一结果类型
pub type Result<T> = std::result::Result<T, NeuroError>;
