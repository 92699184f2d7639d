pub mod file;
#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_API_ENDPOINT: &str = "https://www.mensa-kl.de/api.php?date=0&format=json";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://www.mensa-kl.de/mimg/";
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "https://servedcatering.com/wp-content/uploads/2021/05/menu-item-placeholder.png";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mensa-webhook")]
#[command(about = "Conversational webhook for the TUK Mensa daily menu")]
pub struct CliConfig {
    /// Webhook intent to dispatch (food, veggie or cheap)
    #[arg(long, default_value = "food")]
    pub intent: String,

    /// BCP-47 locale of the requester, e.g. en-US or de-DE
    #[arg(long)]
    pub locale: Option<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    #[arg(long, default_value = DEFAULT_PLACEHOLDER_IMAGE_URL)]
    pub placeholder_image_url: String,

    /// Read endpoint and display settings from a TOML file instead
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn placeholder_image_url(&self) -> &str {
        &self.placeholder_image_url
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("image_base_url", &self.image_base_url)?;
        validate_url("placeholder_image_url", &self.placeholder_image_url)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = CliConfig::try_parse_from(["mensa-webhook"]).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.intent, "food");
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_garbage_endpoint_fails_validation() {
        let config =
            CliConfig::try_parse_from(["mensa-webhook", "--api-endpoint", "not a url"]).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_locale_flag_is_passed_through() {
        let config =
            CliConfig::try_parse_from(["mensa-webhook", "--locale", "de-DE", "--intent", "cheap"])
                .unwrap();

        assert_eq!(config.locale.as_deref(), Some("de-DE"));
        assert_eq!(config.intent, "cheap");
    }
}
