//! # NeuroLocus View
//!
//! 带键的列表协调（reconciliation）。把存储内容对齐到已渲染的列表上，
//! 对仍然存在的记录复用原有行元素，只为新增/删除的记录创建/移除元素。
//! 协调函数不绑定任何具体UI工具包，通过[`ListView`]抽象接口操作。

pub mod reconciler;
pub mod row;
pub mod text;

pub use reconciler::{reconcile, ListView};
pub use row::RowContent;
pub use text::PlainTextView;
