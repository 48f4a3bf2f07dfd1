//! Workflow context provider
//!
//! Wraps the pure [`ConnectionState`] machine in Dioxus signals and exposes
//! narrow capabilities to child components: an adapter can publish a bundle
//! or report a failed handshake, the data panel can start and finish a load,
//! but only the page itself changes the selection.

use dioxus::prelude::*;

use integrations_client::IntegrationItem;

use crate::state::connection::{ConnectionState, LoadRequest, LoadState, Phase};
use crate::types::{CredentialBundle, Identity, Provider};

/// Workflow context shared by the connect page and its children
#[derive(Clone, Copy)]
pub struct WorkflowContext {
    connection: Signal<ConnectionState>,
    /// The display identity the user connects under, bound to the page's
    /// input fields
    pub identity: Signal<Identity>,
}

impl WorkflowContext {
    pub fn provider(&self) -> Option<Provider> {
        self.connection.read().provider()
    }

    pub fn phase(&self) -> Phase {
        self.connection.read().phase()
    }

    pub fn load_state(&self) -> LoadState {
        self.connection.read().load_state().clone()
    }

    pub fn epoch(&self) -> u64 {
        self.connection.read().epoch()
    }

    /// Change the active selection, clearing any captured bundle and load
    /// result.
    pub fn select_provider(&self, provider: Option<Provider>) {
        let mut connection = self.connection;
        connection.write().select_provider(provider);
    }

    /// Mark a credential handshake as in flight.
    pub fn begin_acquisition(&self, epoch: u64) -> bool {
        let mut connection = self.connection;
        let accepted = connection.write().begin_acquisition(epoch);
        if !accepted {
            tracing::debug!(epoch, "acquisition start rejected");
        }
        accepted
    }

    /// Publish a bundle produced by a completed handshake. Stale or
    /// mistagged bundles are discarded.
    pub fn publish_credentials(&self, epoch: u64, bundle: CredentialBundle) -> bool {
        let mut connection = self.connection;
        let accepted = connection.write().publish_credentials(epoch, bundle);
        if !accepted {
            tracing::debug!(epoch, "stale credential bundle discarded");
        }
        accepted
    }

    /// Report a failed handshake, returning the workflow to a retryable
    /// state.
    pub fn fail_acquisition(&self, epoch: u64) -> bool {
        let mut connection = self.connection;
        let accepted = connection.write().fail_acquisition(epoch);
        accepted
    }

    /// Accept a load trigger, or `None` when one is already in flight (or no
    /// bundle is present).
    pub fn begin_load(&self) -> Option<LoadRequest> {
        let mut connection = self.connection;
        let request = connection.write().begin_load();
        if let Some(ref request) = request {
            tracing::debug!(provider = request.provider.label(), "load started");
        }
        request
    }

    /// Commit a load outcome. Stale completions are discarded.
    pub fn complete_load(
        &self,
        epoch: u64,
        result: Result<Vec<IntegrationItem>, String>,
    ) -> bool {
        let mut connection = self.connection;
        let accepted = connection.write().complete_load(epoch, result);
        if !accepted {
            tracing::debug!(epoch, "stale load completion discarded");
        }
        accepted
    }
}

/// Workflow provider component that wraps the app
#[component]
pub fn WorkflowProvider(children: Element) -> Element {
    let connection = use_signal(ConnectionState::new);
    let identity = use_signal(Identity::default);

    use_context_provider(|| WorkflowContext {
        connection,
        identity,
    });

    children
}

/// Hook to access the workflow context
pub fn use_workflow() -> WorkflowContext {
    use_context::<WorkflowContext>()
}
