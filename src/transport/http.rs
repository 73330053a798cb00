use crate::config::ClientConfig;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::Result;

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Execute one chat-completion round trip.
    ///
    /// Non-2xx replies become [`TransportError::Api`] carrying the status and
    /// whatever error text the provider returned. Connection, TLS, and
    /// timeout failures surface as [`TransportError::Http`].
    pub async fn execute_chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(url = %url, model = %request.model, "dispatching completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "completion endpoint returned error");
            return Err(crate::Error::Transport(TransportError::Api {
                status: status.as_u16(),
                message: summarize_error_body(&message),
            }));
        }

        let envelope = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        Ok(envelope)
    }
}

/// Pull the provider's error message out of its JSON body when possible.
fn summarize_error_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Whether the endpoint rejected the credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TransportError::Api { status: 401, .. })
    }
}
