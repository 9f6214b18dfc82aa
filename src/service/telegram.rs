use async_trait::async_trait;

use crate::service::notification::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API client for group notifications.
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
}

impl TelegramNotifier {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    /// Posts a Markdown message to a chat. Any failure is logged and reported
    /// as `false`; errors never cross this boundary.
    async fn send(&self, chat_id: i64, text: &str) -> bool {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.token);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(
                    "Telegram sendMessage to chat {} failed with status {}",
                    chat_id,
                    response.status()
                );
                false
            }
            Err(e) => {
                tracing::warn!("Telegram sendMessage to chat {} failed: {}", chat_id, e);
                false
            }
        }
    }
}
