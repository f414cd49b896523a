//! Outbound client for the Evocon checklist API.
//!
//! One POST per submission, no retries: the relay reports whatever the
//! single attempt produced.

use std::time::Duration;

use crate::api_types::ChecklistPayload;
use crate::config::RelayConfig;

/// Fixed Evocon API base; only the checklist-id path segment varies.
pub const EVOCON_API_BASE: &str = "https://api.evocon.com/api/checklists";

/// Upper bound on one outbound submission, connect included.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client bound to one checklist endpoint.
#[derive(Debug, Clone)]
pub struct EvoconClient {
    http: reqwest::Client,
    checklist_url: String,
}

/// Status and raw body of a completed upstream exchange.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl EvoconClient {
    /// Build the production client for the configured checklist.
    pub fn new(config: &RelayConfig) -> Self {
        Self::for_base_url(config, EVOCON_API_BASE)
    }

    /// Build a client against a different base URL (mock upstreams in tests).
    #[doc(hidden)]
    pub fn with_base_url(config: &RelayConfig, base_url: &str) -> Self {
        Self::for_base_url(config, base_url)
    }

    fn for_base_url(config: &RelayConfig, base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(SUBMIT_TIMEOUT)
            .build()
            .expect("Failed to build reqwest client");
        Self {
            http,
            checklist_url: format!("{}/{}", base_url, config.checklist_id),
        }
    }

    /// Full URL submissions are posted to.
    pub fn checklist_url(&self) -> &str {
        &self.checklist_url
    }

    /// Post one checklist payload with the pre-encoded Basic credential.
    ///
    /// Returns the upstream status and raw body text whenever the
    /// exchange completes, upstream rejections included; any transport
    /// failure (DNS, connect, timeout, interrupted body) surfaces as
    /// the `reqwest` error.
    pub async fn submit(
        &self,
        auth: &str,
        payload: &ChecklistPayload,
    ) -> Result<UpstreamReply, reqwest::Error> {
        let resp = self
            .http
            .post(&self.checklist_url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Basic {}", auth))
            .json(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(UpstreamReply { status, body })
    }
}
