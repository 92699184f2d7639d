use thiserror::Error;

#[derive(Error, Debug)]
pub enum MensaError {
    #[error("Menu request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Menu response could not be decoded: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown webhook handler: {0}")]
    UnknownHandlerError(String),
}

pub type Result<T> = std::result::Result<T, MensaError>;
