use clap::Parser;
use portfolio_bot::utils::{error::ErrorSeverity, logger};
use portfolio_bot::{BotConfig, BotEngine, BotError, CliConfig};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.bot_config() {
        Ok(config) => config,
        Err(e) => {
            // logging is not initialised yet
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_lambda_logger();
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting portfolio-bot CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }
    if let Some(intent_name) = &cli.intent_name {
        tracing::info!("🔧 Intent name overridden to: {}", intent_name);
    }

    match run(&cli, &config).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Bot turn failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &BotConfig) -> Result<String, BotError> {
    let raw = match &cli.event {
        Some(path) => {
            tracing::info!("📁 Reading Lex event from: {}", path);
            tokio::fs::read_to_string(path).await?
        }
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    let engine = BotEngine::from_config(config);
    let response = engine.dispatch_json(&raw)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    Ok(output)
}
