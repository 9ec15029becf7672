//! # NeuroLocus Chat
//!
//! 预置应答的聊天助手：按小写子串匹配问题关键词，
//! 未命中时回退到默认应答。

pub mod responses;

pub use responses::ChatBot;
