use clap::Parser;
use log_fetch::utils::{logger, validation::Validate};
use log_fetch::{CliConfig, Fetcher, SystemCommandRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting log-fetch");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let fetcher = Fetcher::new(
        SystemCommandRunner::new(),
        settings.hosts,
        settings.retrieval,
        settings.options,
    );

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be copied");
        fetcher.dry_run();
        return Ok(());
    }

    let summary = fetcher.run().await;
    tracing::info!(
        "Issued {} remote copies into {}",
        summary.issued,
        fetcher.spec().local_dest
    );

    Ok(())
}
