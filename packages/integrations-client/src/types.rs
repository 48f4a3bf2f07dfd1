use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single record returned by an integration's load endpoint.
///
/// Mirrors the backend's `IntegrationItem` model. Providers populate the
/// fields they have; everything beyond `id` and `name` may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// FastAPI-style error payload.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
