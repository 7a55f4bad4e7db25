//! Telegram Bot API transport for outbound notifications.
//!
//! A thin client around the `sendMessage` method. Delivery is best-effort:
//! the watch loop uses [`Telegram::notify`], which logs a failure and moves
//! on, so a transient Telegram outage can never terminate the loop or lose
//! more than the message that hit it.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_error_anyhow};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

const API_BASE: &str = "https://api.telegram.org";

/// Bound on every outbound send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Telegram Bot API client bound to one chat.
#[derive(Debug)]
pub struct Telegram {
    client: Client,
    token: String,
    chat_id: String,
}

impl Telegram {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    /// Sends a plain-text message.
    pub async fn send(&self, text: &str) -> Result<()> {
        self.send_message(text, None).await
    }

    /// Sends an HTML-formatted message (used for the `<pre>` summary block).
    pub async fn send_html(&self, text: &str) -> Result<()> {
        self.send_message(text, Some("HTML")).await
    }

    /// Best-effort send: failures are logged, never propagated.
    pub async fn notify(&self, text: &str) {
        if let Err(error) = self.send(text).await {
            msg_error!(Message::TelegramSendFailed(error.to_string()));
        }
    }

    async fn send_message(&self, text: &str, parse_mode: Option<&str>) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", API_BASE, self.token);
        let mut payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
        });
        if let Some(mode) = parse_mode {
            payload["parse_mode"] = serde_json::Value::from(mode);
        }

        let response = self.client.post(&url).timeout(REQUEST_TIMEOUT).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(msg_error_anyhow!(Message::TelegramRejected(response.status().to_string())));
        }
        Ok(())
    }
}
