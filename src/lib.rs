//! # NeuroLocus
//!
//! NeuroLocusAI检测记录应用的同步与渲染协调核心。
//! 本crate是工作区各成员的统一门面，演示程序见`demos/`。

pub use neuro_analysis as analysis;
pub use neuro_chat as chat;
pub use neuro_core as core;
pub use neuro_store as store;
pub use neuro_sync as sync;
pub use neuro_theme as theme;
pub use neuro_view as view;
