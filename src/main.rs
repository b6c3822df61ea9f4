use anyhow::Context;
use clap::Parser;
use mypantry::utils::logger;
use mypantry::{AppConfig, CliConfig, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting MyPantry");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    Server::builder()
        .config(config)
        .build()
        .run()
        .await
        .context("Pantry server stopped with an error")
}
