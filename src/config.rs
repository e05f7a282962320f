//! Configuration for the birthday notifier
//!
//! All values come from the process environment (with `.env` support via
//! dotenvy). Loaded once at startup and passed by reference afterwards.

use std::env;
use std::path::PathBuf;

use crate::{Error, Result};

/// Default path of the birthday store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "birthdays.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram Bot API token.
    pub bot_token: String,
    /// Destination chat: a numeric id or an `@channel` name, passed through
    /// to the API unchanged.
    pub chat_id: String,
    /// Path to the JSON birthday store.
    pub store_path: PathBuf,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` are required; without them
    /// no delivery may be attempted.
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| Error::ConfigMissing("TELEGRAM_BOT_TOKEN".to_string()))?;
        let chat_id = env::var("TELEGRAM_CHAT_ID")
            .map_err(|_| Error::ConfigMissing("TELEGRAM_CHAT_ID".to_string()))?;

        Ok(Self {
            bot_token,
            chat_id,
            store_path: env::var("BIRTHDAYS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
            timeout_secs: env::var("TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load a `.env` file into the environment if one exists.
    fn load_dotenv() {
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }
    }
}
