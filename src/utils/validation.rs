use crate::utils::error::{BotError, Result};

/// Lex limits intent names to this many characters.
pub const MAX_INTENT_NAME_LEN: usize = 100;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_intent_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.len() > MAX_INTENT_NAME_LEN {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Intent name must be at most {} characters", MAX_INTENT_NAME_LEN),
        });
    }

    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Intent name can only contain letters and underscores".to_string(),
        });
    }

    Ok(())
}
