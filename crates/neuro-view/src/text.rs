//! 纯文本列表视图
//!
//! [`ListView`]的保留模式参考实现，把历史列表渲染为多行文本。
//! 应用外壳和演示程序用它代替浏览器DOM。

use crate::reconciler::ListView;
use crate::row::RowContent;

/// 基于有序行向量的文本视图
#[derive(Debug, Default)]
pub struct PlainTextView {
    rows: Vec<(String, RowContent)>,
    empty: bool,
}

impl PlainTextView {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            empty: true,
        }
    }

    /// 当前渲染的行，按渲染顺序
    pub fn rows(&self) -> &[(String, RowContent)] {
        &self.rows
    }

    /// 是否正在展示空状态占位
    pub fn is_empty_state(&self) -> bool {
        self.empty
    }

    /// 渲染为多行文本
    pub fn render(&self) -> String {
        if self.empty {
            return "No detection records yet\nUpload an MRI scan to get started".to_string();
        }

        self.rows
            .iter()
            .map(|(_, row)| {
                format!(
                    "{} | ID: {} | {} | {} | {} | {} | {}",
                    row.patient_name,
                    row.patient_id,
                    row.scan_date_label,
                    row.result.as_str(),
                    row.confidence_label,
                    row.location,
                    row.size
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ListView for PlainTextView {
    fn existing_keys(&self) -> Vec<String> {
        self.rows.iter().map(|(key, _)| key.clone()).collect()
    }

    fn create_row(&mut self, content: &RowContent) {
        self.empty = false;
        self.rows.push((content.key.clone(), content.clone()));
    }

    fn update_row(&mut self, key: &str, content: &RowContent) {
        if let Some((_, row)) = self.rows.iter_mut().find(|(k, _)| k == key) {
            // 仅原位更新可变展示字段
            row.patient_name = content.patient_name.clone();
            row.patient_id = content.patient_id.clone();
            row.scan_date_label = content.scan_date_label.clone();
        }
    }

    fn remove_row(&mut self, key: &str) {
        self.rows.retain(|(k, _)| k != key);
    }

    fn show_empty_state(&mut self) {
        self.rows.clear();
        self.empty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciler::reconcile;
    use neuro_core::{DetectionDraft, DetectionRecord, PatientForm};

    fn record(name: &str) -> DetectionRecord {
        let draft = DetectionDraft {
            detected: true,
            confidence: 91.0,
            location: "Posterior Fossa".to_string(),
            size: "8mm x 6mm".to_string(),
        };
        let form = PatientForm {
            patient_name: name.to_string(),
            ..Default::default()
        };
        DetectionRecord::from_draft(&draft, form)
    }

    #[test]
    fn test_single_record_renders_one_row() {
        let mut view = PlainTextView::new();
        reconcile(&mut view, &[record("Alice")]);

        assert_eq!(view.rows().len(), 1);
        assert!(view.render().contains("Alice"));
        assert!(!view.is_empty_state());
    }

    #[test]
    fn test_empty_store_renders_placeholder() {
        let mut view = PlainTextView::new();
        reconcile(&mut view, &[]);

        assert!(view.is_empty_state());
        assert!(view.render().contains("No detection records yet"));
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut view = PlainTextView::new();
        let r = record("Alice");
        reconcile(&mut view, &[r.clone()]);

        let mut renamed = r;
        renamed.patient_name = "Alicia".to_string();
        reconcile(&mut view, &[renamed]);

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].1.patient_name, "Alicia");
    }

    #[test]
    fn test_placeholder_cleared_by_first_row() {
        let mut view = PlainTextView::new();
        reconcile(&mut view, &[]);
        reconcile(&mut view, &[record("Alice")]);

        assert!(!view.is_empty_state());
        assert_eq!(view.rows().len(), 1);
    }
}
