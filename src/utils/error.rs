use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Intent with name {intent} not supported")]
    UnsupportedIntent { intent: String },

    #[error("Slot '{slot}' is required for fulfillment but was not provided")]
    MissingSlot { slot: String },

    #[error("Invalid Lex event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::MissingSlot { .. } | BotError::InvalidEvent(_) => ErrorSeverity::Medium,
            BotError::UnsupportedIntent { .. } | BotError::IoError(_) => ErrorSeverity::High,
            BotError::ConfigError { .. }
            | BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BotError::UnsupportedIntent { .. } => {
                "Check that the bot's intent name matches the configured intent_name"
            }
            BotError::MissingSlot { .. } => {
                "Mark the slot as required in the bot so it is elicited before fulfillment"
            }
            BotError::InvalidEvent(_) => {
                "Make sure the input is a Lex V1 event with currentIntent and invocationSource"
            }
            BotError::IoError(_) => "Check that the file exists and is readable",
            BotError::ConfigError { .. }
            | BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or environment variables and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::UnsupportedIntent { intent } => {
                format!("The bot does not handle the '{}' intent", intent)
            }
            BotError::MissingSlot { slot } => {
                format!("Cannot build a recommendation without '{}'", slot)
            }
            BotError::InvalidEvent(e) => format!("Could not read the Lex event: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
