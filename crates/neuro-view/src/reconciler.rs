//! 带键的列表协调算法
//!
//! 给定存储中的当前记录序列和已渲染的行集合（按记录标识做键），
//! 计算最小的创建/原位更新/移除操作集，使渲染结果与存储完全一致，
//! 同时为跨快照存活的记录保留行元素本身（及其瞬态UI状态）。

use std::collections::HashMap;

use neuro_core::DetectionRecord;

use crate::row::RowContent;

/// 抽象的可渲染列表接口
///
/// 任何保留模式或立即模式的渲染层都可以实现此接口接入协调器。
/// 约定：
/// - `create_row`总是追加到列表末尾，并负责清除空状态占位；
/// - `update_row`只改动可变展示字段，不得销毁重建行元素；
/// - `show_empty_state`清空所有行并渲染占位，重复调用应为幂等。
pub trait ListView {
    /// 读取当前已渲染行的键，按渲染顺序
    fn existing_keys(&self) -> Vec<String>;

    /// 追加一个新行
    fn create_row(&mut self, content: &RowContent);

    /// 原位更新已存在行的可变展示字段
    fn update_row(&mut self, key: &str, content: &RowContent);

    /// 移除指定键的行
    fn remove_row(&mut self, key: &str);

    /// 渲染空状态占位
    fn show_empty_state(&mut self);
}

/// 将存储内容协调到已渲染的列表上
///
/// 算法与参考行为一致：按存储顺序遍历，命中的键原位更新并标记存活，
/// 未命中的键在末尾追加新行，遍历结束后移除所有未被标记的行。
/// 新记录统一追加在末尾而不是插入其存储位置，这是被保留的参考行为。
/// 对未变化的存储重复执行不产生任何元素创建或移除。
pub fn reconcile(view: &mut dyn ListView, records: &[DetectionRecord]) {
    if records.is_empty() {
        view.show_empty_state();
        return;
    }

    // 键 -> 是否仍存活；协调结束后仍为false的键对应已删除的记录
    let mut existing: HashMap<String, bool> =
        view.existing_keys().into_iter().map(|k| (k, false)).collect();

    let mut created = 0usize;
    let mut updated = 0usize;

    for record in records {
        let content = RowContent::from(record);
        match existing.get_mut(record.key()) {
            Some(alive) => {
                *alive = true;
                view.update_row(record.key(), &content);
                updated += 1;
            }
            None => {
                view.create_row(&content);
                created += 1;
            }
        }
    }

    let stale: Vec<String> = existing
        .into_iter()
        .filter_map(|(key, alive)| (!alive).then_some(key))
        .collect();
    let removed = stale.len();
    for key in stale {
        view.remove_row(&key);
    }

    tracing::debug!(
        "Reconciled list: {} created, {} updated, {} removed",
        created,
        updated,
        removed
    );
}
