use crate::config::{DEFAULT_IMAGE_BASE_URL, DEFAULT_PLACEHOLDER_IMAGE_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings loaded from a TOML file, for deployments where flags are
/// impractical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_placeholder_image_url")]
    pub placeholder_image_url: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            placeholder_image_url: default_placeholder_image_url(),
        }
    }
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_placeholder_image_url() -> String {
    DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn image_base_url(&self) -> &str {
        &self.display.image_base_url
    }

    fn placeholder_image_url(&self) -> &str {
        &self.display.placeholder_image_url
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_url("display.image_base_url", &self.display.image_base_url)?;
        validate_url(
            "display.placeholder_image_url",
            &self.display.placeholder_image_url,
        )?;
        Ok(())
    }
}
