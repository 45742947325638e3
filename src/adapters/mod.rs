// Adapters layer: wire formats of the external systems that call the bot.

pub mod lex;
