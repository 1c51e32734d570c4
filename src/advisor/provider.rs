use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while obtaining a reply.
/// The UI treats all of them uniformly (one apology message), but the
/// variants keep the log useful.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A strategy for answering one user message.
///
/// Implementations must be cheap to share: the event loop clones the
/// `Arc<dyn ResponseProvider>` into a spawned task per send.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Returns the name of the provider (shown in the sidebar footer).
    fn name(&self) -> &str;

    /// Produces the bot reply for the given user message.
    async fn reply(&self, message: &str) -> Result<String, ProviderError>;
}
