use crate::adapters::lex::{LexEvent, LexResponse};
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn bot_name(&self) -> &str;
    fn intent_name(&self) -> &str;
}

/// Handles every turn of one Lex intent.
pub trait IntentHandler: Send + Sync {
    fn intent_name(&self) -> &str;
    fn handle(&self, event: &LexEvent) -> Result<LexResponse>;
}
