#[cfg(feature = "lambda")]
use crate::config::{
    DEFAULT_API_ENDPOINT, DEFAULT_IMAGE_BASE_URL, DEFAULT_PLACEHOLDER_IMAGE_URL,
};
#[cfg(feature = "lambda")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "lambda")]
use crate::utils::validation::{validate_url, Validate};
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_endpoint: String,
    pub image_base_url: String,
    pub placeholder_image_url: String,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    /// Every setting has a baked-in default; `validate` is where a bad
    /// override surfaces.
    pub fn from_env() -> Self {
        Self {
            api_endpoint: env::var("API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
            image_base_url: env::var("IMAGE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string()),
            placeholder_image_url: env::var("PLACEHOLDER_IMAGE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_IMAGE_URL.to_string()),
        }
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
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

#[cfg(feature = "lambda")]
impl Validate for LambdaConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("image_base_url", &self.image_base_url)?;
        validate_url("placeholder_image_url", &self.placeholder_image_url)?;
        Ok(())
    }
}
