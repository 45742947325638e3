pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-bot")]
#[command(about = "Run Lex code hook events through the portfolio recommendation bot")]
pub struct CliConfig {
    /// Path to a Lex event JSON file (reads stdin when omitted)
    #[arg(short, long)]
    pub event: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the intent name handled by the bot
    #[arg(long)]
    pub intent_name: Option<String>,

    /// Pretty-print the response JSON
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file when given, applies command-line overrides and
    /// validates the result. Runs before logging is set up, so a bad
    /// `logging.level` is reported instead of ending up in the log filter.
    pub fn bot_config(&self) -> crate::utils::error::Result<toml_config::BotConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::BotConfig::from_file(path)?,
            None => toml_config::BotConfig::default(),
        };

        if let Some(intent_name) = &self.intent_name {
            config.bot.intent_name = intent_name.clone();
        }

        crate::utils::validation::Validate::validate(&config)?;
        Ok(config)
    }
}
