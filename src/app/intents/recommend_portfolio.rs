use crate::adapters::lex::{
    close, delegate, elicit_slot, FulfillmentState, InvocationSource, LexEvent, LexResponse,
    Message,
};
use crate::core::recommender::recommend;
use crate::core::validator::validate;
use crate::domain::model::SlotName;
use crate::domain::ports::IntentHandler;
use crate::utils::error::{BotError, Result};

pub const DEFAULT_INTENT_NAME: &str = "RecommendPortfolio";

/// Validates slots while Lex collects them and builds the final
/// recommendation once they are all filled.
#[derive(Debug, Clone)]
pub struct RecommendPortfolio {
    intent_name: String,
}

impl RecommendPortfolio {
    pub fn new(intent_name: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
        }
    }

    fn validate_slots(&self, event: &LexEvent) -> LexResponse {
        let slots = event.slots();
        let result = validate(
            slots.get(SlotName::Age),
            slots.get(SlotName::InvestmentAmount),
        );

        if let (false, Some(violated)) = (result.is_valid, result.violated_slot) {
            tracing::info!(slot = %violated, "Slot failed validation, eliciting again");
            let mut slots = slots.clone();
            slots.clear(violated);
            return elicit_slot(
                event.session_attributes.clone(),
                event.intent_name(),
                slots,
                violated,
                Message::plain_text(result.message.unwrap_or_default()),
            );
        }

        delegate(event.session_attributes.clone(), slots.clone())
    }

    fn fulfill(&self, event: &LexEvent) -> Result<LexResponse> {
        let slots = event.slots();
        let first_name = required(slots.get(SlotName::FirstName), SlotName::FirstName)?;
        let age = required(slots.get(SlotName::Age), SlotName::Age)?;
        let investment_amount =
            required(slots.get(SlotName::InvestmentAmount), SlotName::InvestmentAmount)?;

        let recommendation = recommend(age, investment_amount, slots.get(SlotName::RiskLevel));
        tracing::info!(%recommendation, "Fulfilling portfolio recommendation");

        let content = format!(
            "{}, thank you for your information; based on the risk level you defined as well as your age of {}, my recommendation is to choose an investment portfolio with {}",
            first_name, age, recommendation
        );

        Ok(close(
            event.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain_text(content),
        ))
    }
}

impl Default for RecommendPortfolio {
    fn default() -> Self {
        Self::new(DEFAULT_INTENT_NAME)
    }
}

impl IntentHandler for RecommendPortfolio {
    fn intent_name(&self) -> &str {
        &self.intent_name
    }

    fn handle(&self, event: &LexEvent) -> Result<LexResponse> {
        match event.invocation_source {
            InvocationSource::DialogCodeHook => Ok(self.validate_slots(event)),
            InvocationSource::FulfillmentCodeHook => self.fulfill(event),
        }
    }
}

fn required(value: Option<&str>, slot: SlotName) -> Result<&str> {
    value.ok_or_else(|| BotError::MissingSlot {
        slot: slot.to_string(),
    })
}
