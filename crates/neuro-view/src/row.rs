//! 行内容投影
//!
//! 把检测记录投影为列表行的展示字段。

use neuro_core::{utils, DetectionRecord, DetectionResult};
use serde::{Deserialize, Serialize};

/// 单行的展示内容
///
/// `patient_name`、`patient_id`、`scan_date_label`是可变展示字段，
/// 协调时对已存在的行仅原位更新这三项；其余字段在行创建时写入。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowContent {
    pub key: String,
    pub patient_name: String,
    pub patient_id: String,
    pub scan_date_label: String,
    pub result: DetectionResult,
    pub confidence_label: String,
    pub location: String,
    pub size: String,
}

impl From<&DetectionRecord> for RowContent {
    fn from(record: &DetectionRecord) -> Self {
        Self {
            key: record.key().to_string(),
            patient_name: record.patient_name.clone(),
            patient_id: record.patient_id.clone(),
            scan_date_label: utils::format_scan_date(&record.scan_date),
            result: record.detection_result,
            confidence_label: format!("{}%", record.confidence_score),
            location: record.tumor_location.clone(),
            size: record.tumor_size.clone(),
        }
    }
}
