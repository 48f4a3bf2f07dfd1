//! Provider credential-acquisition adapters
//!
//! One connect component per provider, sharing the popup handshake in
//! [`oauth`]. The page mounts exactly one of these based on the active
//! selection; switching providers unmounts the old adapter wholesale, so no
//! handshake state carries over between providers.

mod airtable;
mod hubspot;
mod notion;
mod oauth;
mod server_fns;

pub use airtable::AirtableConnect;
pub use hubspot::HubspotConnect;
pub use notion::NotionConnect;
pub use server_fns::load_integration_items;

use dioxus::prelude::ServerFnError;

/// Unwrap a server-function error back to the backend's detail message.
pub fn server_error_detail(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(detail) => detail,
        other => other.to_string(),
    }
}
