//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::advisor::{ProviderError, ResponseProvider};

/// A provider that always answers with the same canned text.
pub struct CannedAdvisor {
    pub response: String,
}

impl CannedAdvisor {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

#[async_trait]
impl ResponseProvider for CannedAdvisor {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, _message: &str) -> Result<String, ProviderError> {
        Ok(self.response.clone())
    }
}

/// A provider that always fails with a network error.
pub struct FailingAdvisor;

#[async_trait]
impl ResponseProvider for FailingAdvisor {
    fn name(&self) -> &str {
        "failing"
    }

    async fn reply(&self, _message: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Network("simulated outage".to_string()))
    }
}

/// Creates a test App with a CannedAdvisor.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(CannedAdvisor::new("canned reply")))
}
