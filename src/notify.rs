//! Notification dispatch via the Telegram Bot API
//!
//! One outbound `sendMessage` call per run. Failures are reported to the
//! caller, never retried; the caller logs and the run completes.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::{Error, Result};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram Bot API dispatcher.
#[derive(Debug, Clone)]
pub struct Notifier {
    http: Client,
    bot_token: String,
    chat_id: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[allow(dead_code)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl Notifier {
    /// Build a dispatcher from configuration.
    ///
    /// An empty credential or destination is a precondition failure; no
    /// delivery may be attempted with it.
    pub fn new(config: &Config) -> Result<Self> {
        if config.bot_token.trim().is_empty() {
            return Err(Error::ConfigMissing("TELEGRAM_BOT_TOKEN".to_string()));
        }
        if config.chat_id.trim().is_empty() {
            return Err(Error::ConfigMissing("TELEGRAM_CHAT_ID".to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("birthday_notifier/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::DeliveryFailed(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            base_url: TELEGRAM_API_URL.to_string(),
        })
    }

    /// Point the dispatcher at a different API host (tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Send `text` to the configured chat. One attempt, no retry.
    pub async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::DeliveryFailed(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::DeliveryFailed(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            let description = serde_json::from_str::<SendMessageResponse>(&body)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(Error::DeliveryFailed(format!(
                "Telegram error {}: {}",
                status, description
            )));
        }

        info!(chat_id = %self.chat_id, "Birthday notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            bot_token: "123:abc".to_string(),
            chat_id: "42".to_string(),
            store_path: PathBuf::from("birthdays.json"),
            timeout_secs: 2,
        }
    }

    fn notifier_for(server: &MockServer) -> Notifier {
        Notifier::new(&config())
            .expect("notifier")
            .with_base_url(&server.base_url())
    }

    #[test]
    fn new_rejects_empty_bot_token() {
        let mut cfg = config();
        cfg.bot_token = "  ".to_string();

        let err = Notifier::new(&cfg).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing(_)));
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn new_rejects_empty_chat_id() {
        let mut cfg = config();
        cfg.chat_id = String::new();

        let err = Notifier::new(&cfg).unwrap_err();
        assert!(matches!(err, Error::ConfigMissing(_)));
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
    }

    #[tokio::test]
    async fn send_posts_chat_id_and_text_unchanged() {
        let server = MockServer::start_async().await;

        let send_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/bot123:abc/sendMessage")
                .json_body(json!({
                    "chat_id": "42",
                    "text": "🎂 Happy Birthday!"
                }));
            then.status(200).json_body(json!({
                "ok": true,
                "result": {"message_id": 1}
            }));
        });

        let notifier = notifier_for(&server);
        notifier.send("🎂 Happy Birthday!").await.unwrap();

        send_mock.assert_calls(1);
    }

    #[tokio::test]
    async fn send_maps_error_status_to_delivery_failed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/bot123:abc/sendMessage");
            then.status(403).json_body(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            }));
        });

        let notifier = notifier_for(&server);
        let err = notifier.send("hello").await.unwrap_err();

        assert!(matches!(err, Error::DeliveryFailed(_)));
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("bot was blocked"));
    }

    #[tokio::test]
    async fn send_reports_non_json_error_body_verbatim() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/bot123:abc/sendMessage");
            then.status(502).body("bad gateway");
        });

        let notifier = notifier_for(&server);
        let err = notifier.send("hello").await.unwrap_err();

        assert!(matches!(err, Error::DeliveryFailed(_)));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[tokio::test]
    async fn send_maps_connection_error_to_delivery_failed() {
        // nothing listens on this port
        let notifier = Notifier::new(&config())
            .expect("notifier")
            .with_base_url("http://127.0.0.1:9");

        let err = notifier.send("hello").await.unwrap_err();
        assert!(matches!(err, Error::DeliveryFailed(_)));
    }
}
