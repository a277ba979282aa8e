use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Sampling temperature for all content generation calls.
const TEMPERATURE: f64 = 0.7;

/// One upstream completion attempt: role-separated prompts plus a budget.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

/// Seam between the client and the upstream model.
///
/// The client holds this as a trait object so tests can substitute a
/// scripted double for the HTTP transport.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Issue exactly one completion attempt and return the reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
    fn name(&self) -> &'static str;
}

/// Chat-completions transport over HTTPS with bearer auth.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        // Client-level timeout: a hung upstream becomes a transport error,
        // which the content client absorbs as any other upstream fault.
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user},
            ],
            "max_tokens": request.max_tokens,
            "temperature": TEMPERATURE,
            "response_format": {"type": "json_object"},
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(crate::Error::Transport(TransportError::Status {
                status: status.as_u16(),
                detail,
            }));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                crate::Error::Transport(TransportError::Other(
                    "completion response carries no message content".to_string(),
                ))
            })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Transport error: {0}")]
    Other(String),
}
