//! Server functions bridging the UI to the integrations backend
//!
//! These run on the server and proxy the FastAPI-style integrations service
//! through [`IntegrationsClient`]. Backend detail messages travel back to the
//! client inside `ServerFnError::ServerError`.

use dioxus::prelude::*;
use serde_json::Value;

use integrations_client::{IntegrationItem, IntegrationsClient};

use crate::types::Provider;

/// Begin an OAuth authorization. Returns the URL to open in a popup.
#[server]
pub async fn authorize_integration(
    provider: Provider,
    user_id: String,
    org_id: String,
) -> Result<String, ServerFnError> {
    server_client()
        .authorize(provider.resource_path(), &user_id, &org_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Pick up the credentials deposited by a completed authorization. One-shot:
/// the backend deletes them on handover, and answers with a detail message
/// if none are there (e.g. the user closed the popup without granting
/// access).
#[server]
pub async fn fetch_integration_credentials(
    provider: Provider,
    user_id: String,
    org_id: String,
) -> Result<Value, ServerFnError> {
    server_client()
        .fetch_credentials(provider.resource_path(), &user_id, &org_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Load records from a provider using previously acquired credentials.
#[server]
pub async fn load_integration_items(
    provider: Provider,
    credentials: Value,
) -> Result<Vec<IntegrationItem>, ServerFnError> {
    server_client()
        .load_items(provider.resource_path(), &credentials)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn server_client() -> IntegrationsClient {
    let url = std::env::var("INTEGRATIONS_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());
    IntegrationsClient::new(url)
}
