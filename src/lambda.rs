#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use mensa_webhook::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use mensa_webhook::core::{ConfigProvider, WebhookRequest, WebhookResponse};
#[cfg(feature = "lambda")]
use mensa_webhook::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use mensa_webhook::{Fulfillment, HttpMenuSource};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<WebhookRequest>) -> Result<WebhookResponse, Error> {
    let config = LambdaConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let source = HttpMenuSource::new(config.api_endpoint());
    let fulfillment = Fulfillment::new(source, config);

    fulfillment
        .handle(&event.payload)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
