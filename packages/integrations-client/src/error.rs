use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntegrationsError>;

/// Error type for integrations backend calls.
#[derive(Debug, Error)]
pub enum IntegrationsError {
    /// Transport-level failure: connect, timeout, TLS, or body decode.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `detail` carries the
    /// backend's `detail` field when present, otherwise the raw body or a
    /// generic fallback — `Display` is the bare detail so callers can render
    /// it to the user verbatim.
    #[error("{detail}")]
    Api { status: u16, detail: String },
}
