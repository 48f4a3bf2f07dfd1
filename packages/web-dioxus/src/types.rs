//! Core types for the connection workflow

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of connectable providers.
///
/// Each variant is bound at compile time to its display label, its backend
/// resource path segment, and (via `integrations`) its connect component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    Notion,
    Airtable,
    Hubspot,
}

impl Provider {
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Notion => "Notion",
            Provider::Airtable => "Airtable",
            Provider::Hubspot => "HubSpot",
        }
    }

    /// Path segment under `/integrations/` on the backend.
    pub fn resource_path(&self) -> &'static str {
        match self {
            Provider::Notion => "notion",
            Provider::Airtable => "airtable",
            Provider::Hubspot => "hubspot",
        }
    }

    pub fn variants() -> &'static [Provider] {
        &[Provider::Notion, Provider::Airtable, Provider::Hubspot]
    }

    /// Resolve a display label back to its provider. `None` for anything
    /// outside the closed set; callers treat that as "nothing selected".
    pub fn from_label(label: &str) -> Option<Provider> {
        Provider::variants()
            .iter()
            .copied()
            .find(|p| p.label() == label)
    }
}

/// The display identity the user connects under. Free-form; the backend
/// only uses it to key handshake state.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user: String,
    pub organization: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user: "TestUser".to_string(),
            organization: "TestOrg".to_string(),
        }
    }
}

/// Opaque secret material produced by a completed handshake, tagged with the
/// provider it belongs to. Never persisted; overwritten wholesale when the
/// selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialBundle {
    pub provider: Provider,
    pub secret: Value,
}
