use crate::app::intents::recommend_portfolio::DEFAULT_INTENT_NAME;
use crate::config::toml_config::DEFAULT_BOT_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::env;

/// Configuration of the Lambda deployment, read from the function's environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub bot_name: String,
    pub intent_name: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| DEFAULT_BOT_NAME.to_string()),
            intent_name: env::var("INTENT_NAME")
                .unwrap_or_else(|_| DEFAULT_INTENT_NAME.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for LambdaConfig {
    fn bot_name(&self) -> &str {
        &self.bot_name
    }

    fn intent_name(&self) -> &str {
        &self.intent_name
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("BOT_NAME", &self.bot_name)?;
        validate_intent_name("INTENT_NAME", &self.intent_name)?;

        tracing::debug!("Lambda configuration validation passed");
        Ok(())
    }
}
