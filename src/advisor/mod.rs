//! # Advisor Providers
//!
//! The one architecturally meaningful seam in Eida: producing a bot reply
//! for a user message. Two interchangeable strategies implement the
//! [`ResponseProvider`] trait and are selected at startup:
//!
//! - [`OfflineAdvisor`]: keyword heuristic over canned advice blocks,
//!   behind a fixed artificial delay. No network.
//! - [`RemoteAdvisor`]: one `POST {message}` to the hosted chat endpoint.
//!
//! Providers return `Result`; the reducer turns any failure into a visible
//! apology message in the transcript. Nothing here panics or retries.

pub mod provider;
pub mod providers;

pub use provider::{ProviderError, ResponseProvider};
pub use providers::{OfflineAdvisor, RemoteAdvisor};
