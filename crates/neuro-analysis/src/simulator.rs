//! 分析模拟器
//!
//! 延迟结束后随机产出检测草稿：约七成概率判阳性，置信度落在
//! [85.0, 99.0]并保留一位小数，位置和大小从固定候选中抽取。

use std::time::Duration;

use neuro_core::{DetectionDraft, NOT_APPLICABLE};
use rand::Rng;
use tracing::debug;

/// 候选肿瘤位置
const TUMOR_LOCATIONS: [&str; 4] = [
    "Posterior Fossa",
    "Fourth Ventricle",
    "brain",
    "Cerebral Hemisphere",
];

/// 候选肿瘤大小
const TUMOR_SIZES: [&str; 4] = [
    "8mm x 6mm",
    "12mm x 10mm",
    "15mm x 12mm",
    "20mm x 18mm",
];

/// 默认分析延迟
const DEFAULT_DELAY: Duration = Duration::from_secs(3);

/// 分析模拟器
#[derive(Debug, Clone)]
pub struct AnalysisSimulator {
    delay: Duration,
}

impl AnalysisSimulator {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// 覆盖分析延迟（测试时设为零）
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// 执行一次模拟分析
    ///
    /// 延迟一旦开始就无条件跑完，没有取消路径。
    pub async fn analyze(&self) -> DetectionDraft {
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        let detected = rng.gen::<f64>() > 0.3;
        let confidence = ((85.0 + rng.gen::<f64>() * 14.0) * 10.0).round() / 10.0;
        let location = TUMOR_LOCATIONS[rng.gen_range(0..TUMOR_LOCATIONS.len())].to_string();
        let size = if detected {
            TUMOR_SIZES[rng.gen_range(0..TUMOR_SIZES.len())].to_string()
        } else {
            NOT_APPLICABLE.to_string()
        };

        debug!(
            "Simulated analysis: detected={}, confidence={}",
            detected, confidence
        );

        DetectionDraft {
            detected,
            confidence,
            location,
            size,
        }
    }
}

impl Default for AnalysisSimulator {
    fn default() -> Self {
        Self::new()
    }
}
