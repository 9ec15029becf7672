//! 瞬态通知
//!
//! 变更协调器把所有来自持久化SDK的成败结果转换成用户可见的
//! 瞬态通知，不再向外传播。

use std::sync::Mutex;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// 通知接口
pub trait Notifier: Send + Sync {
    fn notify(&self, level: ToastLevel, message: &str);
}

/// 基于tracing的通知实现
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Success => tracing::info!("[toast] {}", message),
            ToastLevel::Error => tracing::warn!("[toast] {}", message),
        }
    }
}

/// 记录全部通知的内存实现，测试与演示用
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<(ToastLevel, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收到的全部通知
    pub fn messages(&self) -> Vec<(ToastLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// 最近一条通知
    pub fn last(&self) -> Option<(ToastLevel, String)> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(ToastLevel::Success, "saved");
        notifier.notify(ToastLevel::Error, "failed");

        let messages = notifier.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (ToastLevel::Success, "saved".to_string()));
        assert_eq!(notifier.last(), Some((ToastLevel::Error, "failed".to_string())));
    }
}
