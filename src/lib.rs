//! Telegram Birthday Notifier Library
//!
//! This library provides the pieces of a one-shot birthday bot:
//! - Read a JSON birthday store into memory
//! - Match records against today's month-day and compose the notification
//! - Deliver the message to a Telegram chat via the Bot API
//! - Load credentials and paths from the environment

pub mod config;
pub mod error;
pub mod message;
pub mod notify;
pub mod store;

// Re-export common types
pub use config::Config;
pub use error::{Error, Result};
pub use message::{birthday_message, compose_message, BirthDate};
pub use notify::Notifier;
pub use store::{load_records, BirthdayRecord};
