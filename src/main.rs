use anyhow::Context;
use clap::Parser;
use storefront_home::core::ConfigProvider;
use storefront_home::utils::error::{ErrorSeverity, HomeError};
use storefront_home::utils::{logger, validation::Validate};
use storefront_home::{CliConfig, HomeEngine, HomepagePipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting storefront-home");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(&path).with_context(|| {
                format!("Failed to load config file '{}' (is it valid TOML?)", path)
            })?;

            // 命令列覆蓋設定檔
            config.apply_overrides(cli.overrides());

            run(config).await
        }
        None => run(cli).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<C>(config: C) -> i32
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    tracing::info!(
        "🖥️ Rendering for {} from {}",
        config.device(),
        config.api_base_url()
    );

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = HomepagePipeline::new(storage, config);
    let engine = HomeEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Homepage rendered successfully!");
            println!("✅ Homepage rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &HomeError) -> i32 {
    tracing::error!(
        "❌ Homepage build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
