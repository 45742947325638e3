// Application layer: one handler per Lex intent.

pub mod intents;
