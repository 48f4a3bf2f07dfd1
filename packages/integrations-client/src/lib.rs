//! Pure REST client for the Hublink integrations backend.
//!
//! The backend exposes three endpoints per provider: one that begins an OAuth
//! authorization and returns the URL the user must visit, one that hands over
//! the resulting credentials exactly once, and one that loads records using
//! those credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use integrations_client::IntegrationsClient;
//!
//! let client = IntegrationsClient::new("http://localhost:8000");
//!
//! let url = client.authorize("notion", "TestUser", "TestOrg").await?;
//! // ... the user completes the flow in a popup window ...
//! let secret = client.fetch_credentials("notion", "TestUser", "TestOrg").await?;
//! let items = client.load_items("notion", &secret).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{IntegrationsError, Result};
pub use types::{ErrorBody, IntegrationItem};

use serde_json::Value;

/// Deadline for a single backend call. Applied on native targets; the browser
/// fetch API carries no per-request deadline.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

pub struct IntegrationsClient {
    client: reqwest::Client,
    base_url: String,
}

impl IntegrationsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Begin an authorization flow. Returns the URL the user must visit to
    /// grant access.
    pub async fn authorize(
        &self,
        resource_path: &str,
        user_id: &str,
        org_id: &str,
    ) -> Result<String> {
        let url = format!("{}/integrations/{}/authorize", self.base_url, resource_path);
        let resp = self
            .post(&url)
            .form(&[("user_id", user_id), ("org_id", org_id)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        let auth_url: String = resp.json().await?;
        tracing::debug!(provider = resource_path, "authorization url issued");
        Ok(auth_url)
    }

    /// Pick up the credentials produced by a completed authorization. The
    /// backend hands them over exactly once; asking again, or before the user
    /// finished the flow, yields an [`IntegrationsError::Api`] with the
    /// backend's detail message.
    pub async fn fetch_credentials(
        &self,
        resource_path: &str,
        user_id: &str,
        org_id: &str,
    ) -> Result<Value> {
        let url = format!(
            "{}/integrations/{}/credentials",
            self.base_url, resource_path
        );
        let resp = self
            .post(&url)
            .form(&[("user_id", user_id), ("org_id", org_id)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// Load records from a provider using previously acquired credentials.
    /// An empty collection is a valid outcome, not an error.
    pub async fn load_items(
        &self,
        resource_path: &str,
        credentials: &Value,
    ) -> Result<Vec<IntegrationItem>> {
        let url = format!("{}/integrations/{}/load", self.base_url, resource_path);
        let resp = self
            .post(&url)
            .form(&[("credentials", credentials.to_string())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }

        let items: Vec<IntegrationItem> = resp.json().await?;
        tracing::info!(
            provider = resource_path,
            count = items.len(),
            "loaded integration items"
        );
        Ok(items)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let req = self.client.post(url);
        #[cfg(not(target_arch = "wasm32"))]
        let req = req.timeout(REQUEST_TIMEOUT);
        req
    }

    async fn api_error(resp: reqwest::Response) -> IntegrationsError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => format!("integration backend returned status {}", status),
        };
        IntegrationsError::Api { status, detail }
    }
}
