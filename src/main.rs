//! Birthday Notifier - main entry point
//!
//! One run per invocation: read the birthday store, compose today's
//! notification, send it to the configured Telegram chat, exit. Scheduling
//! repeated runs is the host's job (cron or similar).

use anyhow::Result;
use chrono::Local;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use birthday_notifier::{birthday_message, Config, Notifier};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("birthday_notifier=info".parse()?),
        )
        .init();

    info!("Bot started");

    // Missing credentials end the run without composing or sending anything.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Telegram Bot Token or Chat ID not found in environment variables");
            return Ok(());
        }
    };

    let notifier = match Notifier::new(&config) {
        Ok(notifier) => notifier,
        Err(err) => {
            error!(error = %err, "Failed to set up Telegram dispatcher");
            return Ok(());
        }
    };

    let today = Local::now().date_naive();
    let message = birthday_message(&config.store_path, today);

    // Delivery failure is logged, not escalated; the run still completes.
    if let Err(err) = notifier.send(&message).await {
        error!(error = %err, "Failed to send birthday notification");
    }

    Ok(())
}
