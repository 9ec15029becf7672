//! # NeuroLocus Analysis
//!
//! 模拟分析。用随机数生成检测草稿，带可配置的异步延迟；
//! 不包含任何真实的推理逻辑。

pub mod simulator;

pub use simulator::AnalysisSimulator;
