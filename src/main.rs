use clap::Parser;
use scrub_client::utils::{logger, validation::Validate};
use scrub_client::{CliConfig, LocalStorage, TerminalView, UploadController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting scrub-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let file = config.file.clone();
    let output_path = config.output_path.clone();

    let mut controller = UploadController::new(config, TerminalView::new());

    match controller.run(file.as_deref()).await {
        Ok(report) => {
            if let Some(message) = &report.message {
                tracing::info!("Server message: {}", message);
            }

            // 需要時把結果檔抓回本地
            if let Some(path) = output_path {
                let storage = LocalStorage::new(path.clone());
                controller.fetch_results(&report, &storage).await?;
                println!("📁 Results saved to: {}", path);
            }

            println!("✅ File processed successfully!");
        }
        Err(e) => {
            // 錯誤訊息已由 view 呈現，這裡只記錄並回傳失敗碼
            tracing::error!("❌ Upload failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
