pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

#[cfg(feature = "lambda")]
pub use crate::config::lambda::LambdaConfig;

pub use crate::core::{fetch::HttpMenuSource, handlers::Fulfillment};
pub use crate::utils::error::{MensaError, Result};
