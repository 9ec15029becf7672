//! 应用配置
//!
//! 分层加载：内置默认值 -> 可选配置文件 -> NEURO_*环境变量。

use config::{Config, Environment, File};
use serde::Deserialize;

/// 应用设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 模拟分析延迟（毫秒）
    pub analysis_delay_ms: u64,
    /// 日志级别
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// 加载设置
    pub fn load(config_path: Option<&str>) -> neuro_core::Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("analysis_delay_ms", defaults.analysis_delay_ms)
            .map_err(|e| neuro_core::NeuroError::Config(e.to_string()))?
            .set_default("log_level", defaults.log_level)
            .map_err(|e| neuro_core::NeuroError::Config(e.to_string()))?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder = builder.add_source(Environment::with_prefix("NEURO"));

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| neuro_core::NeuroError::Config(e.to_string()))
    }
}
