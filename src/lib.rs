pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::lex::{LexEvent, LexResponse};
pub use crate::config::{lambda::LambdaConfig, toml_config::BotConfig};
pub use crate::core::{dispatcher::BotEngine, recommender::recommend, validator::validate};
pub use crate::utils::error::{BotError, Result};
