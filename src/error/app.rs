use thiserror::Error;

use super::{ConfigError, FragmentError, IngestError, UiError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
    #[error("Join error: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Fragment error: {0}")]
    Fragment(#[from] FragmentError),
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),
    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn ingest<E>(error: E) -> Self
    where
        E: Into<IngestError>,
    {
        error.into().into()
    }

    pub fn ui<E>(error: E) -> Self
    where
        E: Into<UiError>,
    {
        error.into().into()
    }
}
