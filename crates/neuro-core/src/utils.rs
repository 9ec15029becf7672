//! 通用工具函数

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 生成会话内唯一的本地记录标识
pub fn generate_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// 生成默认患者编号（基于当前时间毫秒数的后6位）
pub fn generate_patient_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("P-{}", tail)
}

/// 扫描日期的列表展示格式
pub fn format_scan_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
