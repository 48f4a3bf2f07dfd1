//! Shared OAuth popup handshake
//!
//! Every provider follows the same shape: ask the backend for an
//! authorization URL, open it in a popup, wait for the user to finish (the
//! backend's callback page closes the window), then pick up the credentials
//! the callback deposited.

use serde_json::Value;
use thiserror::Error;

use crate::types::{Identity, Provider};

use super::server_error_detail;
use super::server_fns::{authorize_integration, fetch_integration_credentials};

/// How often to check whether the popup was closed.
#[cfg(feature = "web")]
const POLL_INTERVAL_MS: u32 = 200;

/// How long to wait for the user before giving up on the popup.
#[cfg(feature = "web")]
const POPUP_DEADLINE_MS: u32 = 5 * 60 * 1000;

#[derive(Debug, Error)]
pub enum AcquireError {
    /// The integrations backend rejected a handshake step; carries its
    /// detail message.
    #[error("{0}")]
    Backend(String),

    #[error("The authorization window was blocked. Allow popups for this site and try again.")]
    PopupBlocked,

    #[error("Authorization requires a browser window.")]
    Unsupported,

    #[error("Authorization timed out. Try connecting again.")]
    TimedOut,
}

/// Run the full handshake for one provider against the given identity.
///
/// Resolves to the opaque credential JSON on success. The credential pickup
/// is one-shot on the backend side; if the user closed the popup without
/// granting access the backend answers with a detail message instead.
pub async fn run_handshake(provider: Provider, identity: Identity) -> Result<Value, AcquireError> {
    let auth_url =
        authorize_integration(provider, identity.user.clone(), identity.organization.clone())
            .await
            .map_err(|e| AcquireError::Backend(server_error_detail(e)))?;

    await_popup_closed(&auth_url, provider.label()).await?;

    fetch_integration_credentials(provider, identity.user, identity.organization)
        .await
        .map_err(|e| AcquireError::Backend(server_error_detail(e)))
}

/// Open the authorization URL in a popup and resolve once the user closes it
/// (the backend's callback page closes it on success). Bounded by
/// [`POPUP_DEADLINE_MS`]; on timeout the window is closed for the user.
#[cfg(feature = "web")]
async fn await_popup_closed(auth_url: &str, label: &str) -> Result<(), AcquireError> {
    use gloo_timers::future::TimeoutFuture;

    let window = web_sys::window().ok_or(AcquireError::Unsupported)?;
    let popup = window
        .open_with_url_and_target_and_features(
            auth_url,
            &format!("{} Authorization", label),
            "width=600,height=600",
        )
        .map_err(|_| AcquireError::PopupBlocked)?
        .ok_or(AcquireError::PopupBlocked)?;

    let mut waited_ms = 0u32;
    loop {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        if popup.closed().unwrap_or(true) {
            return Ok(());
        }
        waited_ms += POLL_INTERVAL_MS;
        if waited_ms >= POPUP_DEADLINE_MS {
            tracing::warn!(provider = label, "authorization popup timed out");
            let _ = popup.close();
            return Err(AcquireError::TimedOut);
        }
    }
}

// During SSR there is no window to open; the real handshake always runs in
// the browser.
#[cfg(not(feature = "web"))]
async fn await_popup_closed(_auth_url: &str, _label: &str) -> Result<(), AcquireError> {
    Err(AcquireError::Unsupported)
}
