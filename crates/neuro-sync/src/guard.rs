//! 控件单飞保护
//!
//! 对应UI上触发控件的禁用状态：一个操作进行中时，同一控件的
//! 再次触发被拒绝；操作结束后无条件恢复。

use std::sync::atomic::{AtomicBool, Ordering};

/// 单个控件的单飞保护
#[derive(Debug, Default)]
pub struct ControlGuard {
    busy: AtomicBool,
}

impl ControlGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尝试占用控件；已被占用时返回false
    pub fn try_begin(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// 释放控件（成功或失败都必须调用）
    pub fn finish(&self) {
        self.busy.store(false, Ordering::Release);
    }

    /// 控件当前是否处于禁用状态
    pub fn is_disabled(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}
