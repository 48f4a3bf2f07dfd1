//! Hublink - Dioxus Fullstack Web Application
//!
//! Connects third-party data providers (Notion, Airtable, HubSpot) to an
//! account: pick a provider, complete its OAuth handshake in a popup, then
//! load and render the provider's records.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod integrations;
mod pages;
mod routes;
mod state;
mod types;
mod workflow;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
