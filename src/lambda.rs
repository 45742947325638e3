#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use portfolio_bot::utils::logger;
#[cfg(feature = "lambda")]
use portfolio_bot::{BotEngine, LambdaConfig, LexEvent, LexResponse};

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: &BotEngine,
    event: LambdaEvent<LexEvent>,
) -> Result<LexResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling Lex code hook");

    let response = engine.dispatch(&event.payload).map_err(|e| {
        tracing::error!(
            "❌ Lex event failed: {} (Severity: {:?}). {}",
            e,
            e.severity(),
            e.recovery_suggestion()
        );
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let engine = BotEngine::from_config(&config);

    tracing::info!(
        bot = %config.bot_name,
        intent = %config.intent_name,
        "Starting portfolio bot Lambda function"
    );

    let engine = &engine;
    run(service_fn(move |event| function_handler(engine, event))).await
}
