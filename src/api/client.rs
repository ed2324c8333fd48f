use std::time::Duration;

use reqwest::Client;

use crate::{
    infra::{config::ApiConfig, error::AppError},
    usecases::send_message::{ChatBackend, ChatBackendError},
};

use super::wire::{ChatRequestBody, ChatResponseBody};

/// `ChatBackend` over JSON HTTP.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    endpoint: String,
    user_type: Option<String>,
}

impl HttpChatBackend {
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            user_type: config.user_type.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatBackend for HttpChatBackend {
    async fn send(&self, message: &str) -> Result<Option<String>, ChatBackendError> {
        let body = ChatRequestBody {
            message,
            user_type: self.user_type.as_deref(),
        };

        tracing::debug!(endpoint = %self.endpoint, chars = message.chars().count(), "posting chat message");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|error| ChatBackendError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatBackendError::Status(status.as_u16()));
        }

        let parsed: ChatResponseBody = response
            .json()
            .await
            .map_err(|error| ChatBackendError::InvalidBody(error.to_string()))?;

        tracing::debug!(has_reply = parsed.reply.is_some(), "chat response received");
        Ok(parsed.reply_text())
    }
}
