use anyhow::Result;
use portfolio_bot::adapters::lex::{DialogAction, FulfillmentState};
use portfolio_bot::{BotConfig, BotEngine, BotError, LexEvent};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn fulfillment_event(intent: &str, slots: Value) -> LexEvent {
    serde_json::from_value(json!({
        "invocationSource": "FulfillmentCodeHook",
        "sessionAttributes": null,
        "currentIntent": {"name": intent, "slots": slots}
    }))
    .expect("valid Lex event")
}

fn fulfilled_content(engine: &BotEngine, event: &LexEvent) -> Result<String> {
    match engine.dispatch(event)?.dialog_action {
        DialogAction::Close {
            fulfillment_state,
            message,
        } => {
            assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
            Ok(message.content)
        }
        other => panic!("expected Close, got {:?}", other),
    }
}

#[test]
fn test_large_investment_recommendation() -> Result<()> {
    let engine = BotEngine::default();
    let event = fulfillment_event(
        "RecommendPortfolio",
        json!({"firstName": "Grace", "age": "40", "investmentAmount": "150000", "riskLevel": "Medium"}),
    );

    let content = fulfilled_content(&engine, &event)?;
    assert_eq!(
        content,
        "Grace, thank you for your information; based on the risk level you defined as well as your age of 40, my recommendation is to choose an investment portfolio with 60% bonds (AGG), 40% equities (SPY).  However, due to your large initial investment, you may be able to take on more risk."
    );
    Ok(())
}

#[test]
fn test_unrecognized_risk_level_gets_aggressive_allocation() -> Result<()> {
    let engine = BotEngine::default();
    let event = fulfillment_event(
        "RecommendPortfolio",
        json!({"firstName": "Alan", "age": "50", "investmentAmount": "6000", "riskLevel": "vHigh"}),
    );

    let content = fulfilled_content(&engine, &event)?;
    assert!(content.ends_with("with 20% bonds (AGG), 80% equities (SPY)"));
    Ok(())
}

#[test]
fn test_missing_investment_amount_is_error() {
    let engine = BotEngine::default();
    let event = fulfillment_event(
        "RecommendPortfolio",
        json!({"firstName": "Alan", "age": "50", "investmentAmount": null, "riskLevel": "Low"}),
    );

    let err = engine.dispatch(&event).unwrap_err();
    assert!(matches!(err, BotError::MissingSlot { ref slot } if slot == "investmentAmount"));
}

#[test]
fn test_unsupported_intent_is_rejected() {
    let engine = BotEngine::default();
    let event = fulfillment_event("BookHotel", json!({}));

    let err = engine.dispatch(&event).unwrap_err();
    assert_eq!(err.to_string(), "Intent with name BookHotel not supported");
}

#[test]
fn test_configured_intent_name() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[bot]\nname = \"AdvisorBot\"\nintent_name = \"SuggestPortfolio\"\n")?;

    let config = BotConfig::from_file(file.path())?;
    let engine = BotEngine::from_config(&config);

    let event = fulfillment_event(
        "SuggestPortfolio",
        json!({"firstName": "Ada", "age": "20", "investmentAmount": "5000", "riskLevel": "vLow"}),
    );
    let content = fulfilled_content(&engine, &event)?;
    assert!(content.ends_with("with 80% bonds (AGG), 20% equities (SPY)"));

    let default_intent = fulfillment_event("RecommendPortfolio", json!({}));
    assert!(matches!(
        engine.dispatch(&default_intent),
        Err(BotError::UnsupportedIntent { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_dispatch_json_from_event_file() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("event.json");
    let event = json!({
        "invocationSource": "FulfillmentCodeHook",
        "currentIntent": {
            "name": "RecommendPortfolio",
            "slots": {"firstName": "Ada", "age": "30", "investmentAmount": "50000", "riskLevel": "Medium"}
        }
    });
    tokio::fs::write(&path, event.to_string()).await?;

    let raw = tokio::fs::read_to_string(&path).await?;
    let response = BotEngine::default().dispatch_json(&raw)?;
    let value = serde_json::to_value(&response)?;

    assert_eq!(value["dialogAction"]["type"], "Close");
    assert_eq!(value["sessionAttributes"], json!({}));
    assert!(value["dialogAction"]["message"]["content"]
        .as_str()
        .unwrap_or_default()
        .contains("40% bonds (AGG), 60% equities (SPY)"));
    Ok(())
}
