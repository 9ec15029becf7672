//! 会话演示
//!
//! 演示快照协调的关键行为：整体替换、行复用、末尾追加和空状态。
//!
//! 运行: cargo run --example session_demo

use std::sync::Arc;
use std::time::Duration;

use neurolocus::analysis::AnalysisSimulator;
use neurolocus::core::{PatientForm, Result};
use neurolocus::store::RecordStore;
use neurolocus::sync::{
    init_sync, DataSdk, InMemoryDataSdk, MutationCoordinator, Notifier, StoreSyncHandler,
    TracingNotifier,
};
use neurolocus::view::{ListView, PlainTextView};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let store = RecordStore::shared();
    let view = Arc::new(tokio::sync::Mutex::new(PlainTextView::new()));
    let sdk: Arc<dyn DataSdk> = Arc::new(InMemoryDataSdk::new());
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let coordinator = MutationCoordinator::new(store.clone(), sdk.clone(), notifier);

    let handler = Arc::new(StoreSyncHandler::new(store.clone(), view.clone()));
    init_sync(&sdk, handler).await;

    println!("== 初始状态 ==");
    println!("{}\n", view.lock().await.render());

    // 连续保存三条记录
    let simulator = AnalysisSimulator::new().with_delay(Duration::ZERO);
    for name in ["Alice", "Bob", "Carol"] {
        let draft = simulator.analyze().await;
        coordinator.set_draft(draft).await;
        coordinator
            .save(PatientForm {
                patient_name: name.to_string(),
                ..Default::default()
            })
            .await?;
    }

    println!("== 三条记录 ==");
    println!("{}\n", view.lock().await.render());

    // 删除中间一条，其余行保持原有标识
    let bob_backend_id = store.read().await.records()[1]
        .backend_id
        .clone()
        .expect("saved record has backend id");
    let keys_before = view.lock().await.existing_keys();

    coordinator.request_delete(&bob_backend_id).await?;
    coordinator.confirm_delete().await?;

    let keys_after = view.lock().await.existing_keys();
    println!("== 删除Bob之后 ==");
    println!("{}\n", view.lock().await.render());
    println!(
        "行复用: {} -> {} (首行键未变: {})",
        keys_before.len(),
        keys_after.len(),
        keys_before[0] == keys_after[0]
    );

    Ok(())
}
