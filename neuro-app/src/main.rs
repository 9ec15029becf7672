//! NeuroLocus应用主程序
//!
//! 把同步核心接到内存持久化后端上，跑一段脚本化会话：
//! 模拟分析 -> 保存 -> 快照协调 -> 删除。

mod settings;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use neuro_analysis::AnalysisSimulator;
use neuro_chat::ChatBot;
use neuro_core::{PatientForm, Result};
use neuro_store::RecordStore;
use neuro_sync::{
    init_sync, DataSdk, InMemoryDataSdk, MutationCoordinator, Notifier, StoreSyncHandler,
    TracingNotifier,
};
use neuro_theme::ThemeManager;
use neuro_view::{ListView, PlainTextView};
use settings::Settings;
use tracing::{info, warn};

/// NeuroLocus命令行参数
#[derive(Parser, Debug)]
#[command(name = "neuro-app")]
#[command(about = "NeuroLocusAI 检测记录同步核心演示程序")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 模拟分析延迟（毫秒），覆盖配置文件
    #[arg(long)]
    analysis_delay_ms: Option<u64>,

    /// 日志级别
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(delay) = args.analysis_delay_ms {
        settings.analysis_delay_ms = delay;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_level.as_str())
        .init();

    let theme = ThemeManager::new();
    info!("启动{}...", theme.config().app_title);
    info!("  分析延迟: {}ms", settings.analysis_delay_ms);

    // 组装核心：存储、视图、持久化后端、协调器
    let store = RecordStore::shared();
    let view = Arc::new(tokio::sync::Mutex::new(PlainTextView::new()));
    let sdk: Arc<dyn DataSdk> = Arc::new(InMemoryDataSdk::new());
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let coordinator =
        MutationCoordinator::new(store.clone(), sdk.clone(), notifier);

    let handler = Arc::new(StoreSyncHandler::new(store.clone(), view.clone()));
    if !init_sync(&sdk, handler).await {
        warn!("同步未生效，以降级模式继续");
    }

    // 模拟一次完整的上传-分析-保存流程
    let simulator = AnalysisSimulator::new()
        .with_delay(Duration::from_millis(settings.analysis_delay_ms));
    info!("开始模拟分析...");
    let draft = simulator.analyze().await;
    info!(
        "分析完成: detected={}, confidence={}%",
        draft.detected, draft.confidence
    );
    coordinator.set_draft(draft).await;

    let form = PatientForm {
        patient_id: String::new(), // 留空走默认编号
        patient_name: "Demo Patient".to_string(),
        notes: "scripted session".to_string(),
    };
    coordinator.save(form).await?;

    {
        let view = view.lock().await;
        info!("历史列表:\n{}", view.render());
    }
    {
        let store = store.read().await;
        let stats = store.stats();
        info!(
            "统计: {} scans, {} detected",
            stats.total_scans, stats.positive_detections
        );
    }

    // 聊天助手演示
    let bot = ChatBot::new();
    info!("Chat> what is ependymoma");
    info!("Bot> {}", bot.respond("what is ependymoma"));

    // 两步删除流程
    let backend_id = {
        let store = store.read().await;
        store.records()[0].backend_id.clone()
    };
    if let Some(backend_id) = backend_id {
        coordinator.request_delete(&backend_id).await?;
        coordinator.confirm_delete().await?;
    }

    {
        let view = view.lock().await;
        info!("删除后历史列表:\n{}", view.render());
        debug_assert!(view.existing_keys().is_empty());
    }

    info!("会话结束");
    Ok(())
}
