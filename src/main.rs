use clap::Parser;
use mensa_webhook::config::file::TomlConfig;
use mensa_webhook::core::{ConfigProvider, WebhookResponse};
use mensa_webhook::domain::model::{HandlerRef, Session, UserInfo, WebhookRequest};
use mensa_webhook::utils::{logger, validation::Validate};
use mensa_webhook::{CliConfig, Fulfillment, HttpMenuSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting mensa-webhook CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let response = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            dispatch(&cli.intent, cli.locale.as_deref(), config).await?
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
            dispatch(&cli.intent, cli.locale.as_deref(), cli.clone()).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn dispatch<C: ConfigProvider>(
    intent: &str,
    locale: Option<&str>,
    config: C,
) -> mensa_webhook::Result<WebhookResponse> {
    let source = HttpMenuSource::new(config.api_endpoint());
    let fulfillment = Fulfillment::new(source, config);

    let request = WebhookRequest {
        handler: HandlerRef {
            name: intent.to_string(),
        },
        session: Session::default(),
        user: UserInfo {
            locale: locale.map(String::from),
        },
    };

    fulfillment.handle(&request).await
}
