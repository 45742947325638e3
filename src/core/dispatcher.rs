use crate::adapters::lex::{LexEvent, LexResponse};
use crate::app::intents::recommend_portfolio::RecommendPortfolio;
use crate::domain::ports::{ConfigProvider, IntentHandler};
use crate::utils::error::{BotError, Result};

/// Routes Lex events to the handler registered for their intent.
pub struct BotEngine {
    handlers: Vec<Box<dyn IntentHandler>>,
}

impl BotEngine {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Engine with the portfolio handler registered under the configured intent name.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        tracing::debug!(
            bot = config.bot_name(),
            intent = config.intent_name(),
            "Registering intent handler"
        );
        Self::new().with_handler(RecommendPortfolio::new(config.intent_name()))
    }

    pub fn with_handler<H: IntentHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn dispatch(&self, event: &LexEvent) -> Result<LexResponse> {
        let intent = event.intent_name();
        tracing::info!(
            intent,
            source = ?event.invocation_source,
            user_id = event.user_id.as_deref().unwrap_or("-"),
            "Dispatching Lex event"
        );

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.intent_name() == intent)
            .ok_or_else(|| {
                tracing::warn!(intent, "No handler registered for intent");
                BotError::UnsupportedIntent {
                    intent: intent.to_string(),
                }
            })?;

        handler.handle(event)
    }

    /// Parses a raw Lex event and dispatches it.
    pub fn dispatch_json(&self, raw: &str) -> Result<LexResponse> {
        let event: LexEvent = serde_json::from_str(raw)?;
        self.dispatch(&event)
    }
}

impl Default for BotEngine {
    fn default() -> Self {
        Self::new().with_handler(RecommendPortfolio::default())
    }
}
