use anyhow::Context;
use clap::Parser;
use wordtiles::utils::{logger, validation::Validate};
use wordtiles::{CachedHttpSource, CliConfig, EtlEngine, LocalStorage, WordListPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting wordtiles");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 快取相對於工作目錄，輸出相對於 output_path
    let source = CachedHttpSource::new(LocalStorage::new(".".to_string()));
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = WordListPipeline::new(storage, source, config);
    let engine = EtlEngine::new(pipeline);

    let report = engine.run().await.map_err(|e| {
        tracing::error!("❌ Run failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        anyhow::Error::new(e)
    });
    let report = report.context("word list processing failed")?;

    tracing::info!("✅ Wrote {} files", report.files_written.len());
    println!("✅ Output saved to: {}", report.output_path);
    Ok(())
}
