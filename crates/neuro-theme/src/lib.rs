//! # NeuroLocus Theme
//!
//! 展示配置对接层：默认配置、部分覆盖合并、可重着色令牌枚举
//! 与反向写回通道。纯展示接线，核心逻辑不依赖本crate。

pub mod config;

pub use config::{ColorToken, ThemeConfig, ThemeManager, ThemeOverrides, ThemeSink};
