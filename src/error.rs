//! Error types for the birthday notifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Birthday store not found: {0}")]
    StoreNotFound(String),

    #[error("Malformed birthday store: {0}")]
    MalformedStore(String),

    #[error("Unparseable date: {0}")]
    UnparseableDate(String),

    #[error("Missing configuration: {0}")]
    ConfigMissing(String),

    #[error("Telegram delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedStore(err.to_string())
    }
}
