//! 展示配置管理
//!
//! 配置SDK推送部分覆盖，空缺字段回退默认值；宿主可以通过
//! 反向通道把更新后的颜色值写回。

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 完整展示配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub app_title: String,
    pub tagline: String,
    pub upload_title: String,
    pub chatbot_welcome: String,
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            app_title: "NeuroLocusAI".to_string(),
            tagline: "Automated Ependymoma Detection & Localization".to_string(),
            upload_title: "Upload MRI Scan".to_string(),
            chatbot_welcome: "Hello! I'm your AI assistant for ependymoma detection. \
                I can help you understand results, explain the detection process, or \
                answer questions about ependymoma. How can I assist you today?"
                .to_string(),
            background_color: "#020617".to_string(),
            surface_color: "#0f172a".to_string(),
            text_color: "#f8fafc".to_string(),
            primary_color: "#10b981".to_string(),
            secondary_color: "#8b5cf6".to_string(),
        }
    }
}

/// 配置SDK推送的部分覆盖
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub app_title: Option<String>,
    pub tagline: Option<String>,
    pub upload_title: Option<String>,
    pub chatbot_welcome: Option<String>,
    pub background_color: Option<String>,
    pub surface_color: Option<String>,
    pub text_color: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

/// 可重着色的颜色令牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Background,
    Surface,
    Text,
    Primary,
    Secondary,
}

impl ColorToken {
    pub const ALL: [ColorToken; 5] = [
        Self::Background,
        Self::Surface,
        Self::Text,
        Self::Primary,
        Self::Secondary,
    ];
}

/// 配置应用的接缝：宿主把合并后的配置渲染到界面
pub trait ThemeSink {
    fn apply(&mut self, config: &ThemeConfig);
}

/// 展示配置管理器
#[derive(Debug, Default)]
pub struct ThemeManager {
    config: ThemeConfig,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前生效配置
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// 应用一份部分覆盖并刷新宿主
    ///
    /// 覆盖值逐字段生效，空缺字段保持默认/当前值。
    pub fn on_config_change(&mut self, overrides: ThemeOverrides, sink: &mut dyn ThemeSink) {
        let defaults = ThemeConfig::default();
        self.config = ThemeConfig {
            app_title: overrides.app_title.unwrap_or(defaults.app_title),
            tagline: overrides.tagline.unwrap_or(defaults.tagline),
            upload_title: overrides.upload_title.unwrap_or(defaults.upload_title),
            chatbot_welcome: overrides.chatbot_welcome.unwrap_or(defaults.chatbot_welcome),
            background_color: overrides
                .background_color
                .unwrap_or(defaults.background_color),
            surface_color: overrides.surface_color.unwrap_or(defaults.surface_color),
            text_color: overrides.text_color.unwrap_or(defaults.text_color),
            primary_color: overrides.primary_color.unwrap_or(defaults.primary_color),
            secondary_color: overrides
                .secondary_color
                .unwrap_or(defaults.secondary_color),
        };
        debug!("Theme config updated");
        sink.apply(&self.config);
    }

    /// 读取颜色令牌的当前值
    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Background => &self.config.background_color,
            ColorToken::Surface => &self.config.surface_color,
            ColorToken::Text => &self.config.text_color,
            ColorToken::Primary => &self.config.primary_color,
            ColorToken::Secondary => &self.config.secondary_color,
        }
    }

    /// 反向通道：把更新后的颜色值写回配置
    pub fn set_color(&mut self, token: ColorToken, value: &str) {
        let slot = match token {
            ColorToken::Background => &mut self.config.background_color,
            ColorToken::Surface => &mut self.config.surface_color,
            ColorToken::Text => &mut self.config.text_color,
            ColorToken::Primary => &mut self.config.primary_color,
            ColorToken::Secondary => &mut self.config.secondary_color,
        };
        *slot = value.to_string();
        debug!("Color token {:?} set to {}", token, value);
    }

    /// 编辑面板展示的键值对
    pub fn edit_panel_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("app_title", self.config.app_title.clone()),
            ("tagline", self.config.tagline.clone()),
            ("upload_title", self.config.upload_title.clone()),
            ("chatbot_welcome", self.config.chatbot_welcome.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<ThemeConfig>,
    }

    impl ThemeSink for RecordingSink {
        fn apply(&mut self, config: &ThemeConfig) {
            self.applied.push(config.clone());
        }
    }

    #[test]
    fn test_override_wins_blank_falls_back() {
        let mut manager = ThemeManager::new();
        let mut sink = RecordingSink::default();

        let overrides = ThemeOverrides {
            app_title: Some("CustomTitle".to_string()),
            ..Default::default()
        };
        manager.on_config_change(overrides, &mut sink);

        assert_eq!(manager.config().app_title, "CustomTitle");
        // 未覆盖的字段回退默认值
        assert_eq!(manager.config().tagline, ThemeConfig::default().tagline);
        assert_eq!(sink.applied.len(), 1);
    }

    #[test]
    fn test_recolor_reverse_channel() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.color(ColorToken::Primary), "#10b981");

        manager.set_color(ColorToken::Primary, "#ff0000");
        assert_eq!(manager.color(ColorToken::Primary), "#ff0000");

        // 其余令牌不受影响
        assert_eq!(manager.color(ColorToken::Background), "#020617");
        assert_eq!(ColorToken::ALL.len(), 5);
    }

    #[test]
    fn test_edit_panel_values() {
        let manager = ThemeManager::new();
        let values = manager.edit_panel_values();

        assert_eq!(values.len(), 4);
        assert_eq!(values[0].0, "app_title");
        assert_eq!(values[0].1, "NeuroLocusAI");
    }
}
