//! Eida library exports for testing

use clap::ValueEnum;

pub mod advisor;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Provider {
    /// Hosted chat endpoint
    #[default]
    Remote,
    /// Canned advice, no network
    Offline,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Remote => "remote",
            Provider::Offline => "offline",
        }
    }
}
