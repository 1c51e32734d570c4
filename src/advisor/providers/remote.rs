//! Remote advisor: one POST to the hosted chat endpoint.
//!
//! Request body is `{"message": "..."}`; the success body is expected to
//! carry `{"reply": "..."}`. A missing `reply` field degrades to a fixed
//! fallback string rather than an error. Non-2xx statuses and transport
//! failures are reported as [`ProviderError`]s — the reducer maps every
//! one of them to the same apology message, with no status-specific
//! handling and no retry.

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::advisor::{ProviderError, ResponseProvider};

/// Shown when the endpoint answers 2xx but without a `reply` field.
pub const MISSING_REPLY_FALLBACK: &str =
    "Sorry, I didn’t get a response from the AI agent.";

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    reply: Option<String>,
}

/// Hosted chat API provider.
pub struct RemoteAdvisor {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteAdvisor {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ResponseProvider for RemoteAdvisor {
    fn name(&self) -> &str {
        "remote"
    }

    async fn reply(&self, message: &str) -> Result<String, ProviderError> {
        debug!("POST {} ({} bytes)", self.endpoint, message.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        match parsed.reply {
            Some(reply) => {
                info!("Chat endpoint replied ({} bytes)", reply.len());
                Ok(reply)
            }
            None => {
                info!("Chat endpoint replied without a reply field");
                Ok(MISSING_REPLY_FALLBACK.to_string())
            }
        }
    }
}
