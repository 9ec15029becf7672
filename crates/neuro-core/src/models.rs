//! 核心数据模型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils;

/// 记录存储容量上限
pub const MAX_RECORDS: usize = 999;

/// 阴性结果的占位值
pub const NOT_APPLICABLE: &str = "N/A";

/// 患者姓名留空时的默认值
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// 检测结论
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DetectionResult {
    Positive, // 检出肿瘤
    Negative, // 未检出
}

impl DetectionResult {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

/// 一条已保存的检测记录
///
/// 对外持久化形态为snake_case JSON；`__backendId`由持久化SDK在创建成功后
/// 通过快照推送写回，本地创建时为空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: String, // 会话内本地生成，协调渲染的键
    #[serde(rename = "__backendId", default, skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<String>,
    pub patient_id: String,
    pub patient_name: String,
    pub scan_date: DateTime<Utc>,
    pub detection_result: DetectionResult,
    pub confidence_score: f64,
    pub tumor_location: String,
    pub tumor_size: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl DetectionRecord {
    /// 协调渲染使用的稳定键
    pub fn key(&self) -> &str {
        &self.id
    }

    /// 是否已获得后端标识（即已确认持久化）
    pub fn has_backend_id(&self) -> bool {
        self.backend_id.is_some()
    }

    /// 由分析草稿和表单输入构造新记录
    ///
    /// 不变量在此处统一收口：阴性结果的位置和大小强制为"N/A"，
    /// 置信度钳制在 [0,100]。
    pub fn from_draft(draft: &DetectionDraft, form: PatientForm) -> Self {
        let now = Utc::now();
        let form = form.normalized();
        let result = if draft.detected {
            DetectionResult::Positive
        } else {
            DetectionResult::Negative
        };

        let (location, size) = if draft.detected {
            (draft.location.clone(), draft.size.clone())
        } else {
            (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string())
        };

        Self {
            id: utils::generate_record_id(),
            backend_id: None,
            patient_id: form.patient_id,
            patient_name: form.patient_name,
            scan_date: now,
            detection_result: result,
            confidence_score: draft.confidence.clamp(0.0, 100.0),
            tumor_location: location,
            tumor_size: size,
            notes: form.notes,
            created_at: now,
        }
    }
}

/// 模拟分析产生的临时检测草稿
///
/// 用户显式保存之前仅存在于内存中。
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionDraft {
    pub detected: bool,
    pub confidence: f64,
    pub location: String,
    pub size: String,
}

/// 保存表单的用户输入
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub patient_id: String,
    pub patient_name: String,
    pub notes: String,
}

impl PatientForm {
    /// 输入规范化：空白字段回退为默认值，永远不会硬失败
    pub fn normalized(self) -> Self {
        let patient_id = match self.patient_id.trim() {
            "" => utils::generate_patient_id(),
            id => id.to_string(),
        };
        let patient_name = match self.patient_name.trim() {
            "" => UNKNOWN_PATIENT.to_string(),
            name => name.to_string(),
        };
        Self {
            patient_id,
            patient_name,
            notes: self.notes.trim().to_string(),
        }
    }
}
