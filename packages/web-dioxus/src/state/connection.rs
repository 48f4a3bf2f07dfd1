//! Pure connection workflow state machine.
//!
//! All orchestration decisions live here, synchronously, with no IO: which
//! provider is selected, whether a credential bundle has been captured, and
//! where the one-shot record load stands. Async work (the OAuth handshake,
//! the load request) happens elsewhere; its completions come back through
//! `publish_credentials` / `fail_acquisition` / `complete_load` carrying the
//! epoch they started under, and are discarded once the epoch has moved on.
//! That epoch check is the stale-write guard: switching providers mid-flight
//! never aborts the old task, it just makes its eventual completion inert.

use integrations_client::IntegrationItem;
use serde_json::Value;

use crate::types::{CredentialBundle, Provider};

/// Where the workflow stands for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NoSelection,
    ProviderChosen,
    CredentialsPending,
    CredentialsReady,
}

/// Lifecycle of the one-shot record load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    /// An empty collection is a valid outcome, distinct from both
    /// `NotStarted` and `Failed`.
    Loaded(Vec<IntegrationItem>),
    Failed(String),
}

/// Everything an async load task needs, snapshotted when the load is
/// accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub epoch: u64,
    pub provider: Provider,
    pub credentials: Value,
}

#[derive(Debug, Default)]
pub struct ConnectionState {
    provider: Option<Provider>,
    phase: Phase,
    bundle: Option<CredentialBundle>,
    load: LoadState,
    /// Bumped on every selection change. Completions carrying an older value
    /// are stale and mutate nothing.
    epoch: u64,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bundle(&self) -> Option<&CredentialBundle> {
        self.bundle.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Change the active selection. Unconditional: any captured bundle is
    /// cleared, the load state returns to `NotStarted`, and the epoch moves
    /// on so in-flight completions from the old selection land dead.
    pub fn select_provider(&mut self, provider: Option<Provider>) {
        self.epoch += 1;
        self.provider = provider;
        self.bundle = None;
        self.load = LoadState::NotStarted;
        self.phase = match provider {
            Some(_) => Phase::ProviderChosen,
            None => Phase::NoSelection,
        };
    }

    /// Start a credential handshake. Returns `false` (and does nothing) if
    /// the epoch is stale or no handshake can start from the current phase.
    pub fn begin_acquisition(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != Phase::ProviderChosen {
            return false;
        }
        self.phase = Phase::CredentialsPending;
        true
    }

    /// Store a bundle produced by a completed handshake. Last write wins;
    /// rejected when the epoch is stale or the bundle is tagged for a
    /// provider other than the active selection.
    pub fn publish_credentials(&mut self, epoch: u64, bundle: CredentialBundle) -> bool {
        if epoch != self.epoch || self.provider != Some(bundle.provider) {
            return false;
        }
        self.bundle = Some(bundle);
        self.phase = Phase::CredentialsReady;
        true
    }

    /// Record a failed handshake, returning the workflow to a retryable
    /// `ProviderChosen`. Stale failures are discarded.
    pub fn fail_acquisition(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.phase != Phase::CredentialsPending {
            return false;
        }
        self.phase = Phase::ProviderChosen;
        true
    }

    /// Accept a load trigger. `None` when no bundle is present or a load is
    /// already in flight; the caller issues no request in that case, which
    /// is what keeps repeated triggers down to one network call.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        if matches!(self.load, LoadState::Loading) {
            return None;
        }
        let bundle = self.bundle.as_ref()?;
        self.load = LoadState::Loading;
        Some(LoadRequest {
            epoch: self.epoch,
            provider: bundle.provider,
            credentials: bundle.secret.clone(),
        })
    }

    /// Commit a load outcome. Stale completions (old epoch, or no load in
    /// flight) mutate nothing.
    pub fn complete_load(
        &mut self,
        epoch: u64,
        result: Result<Vec<IntegrationItem>, String>,
    ) -> bool {
        if epoch != self.epoch || !matches!(self.load, LoadState::Loading) {
            return false;
        }
        self.load = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(detail) => LoadState::Failed(detail),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(provider: Provider, token: &str) -> CredentialBundle {
        CredentialBundle {
            provider,
            secret: json!({ "access_token": token }),
        }
    }

    fn item(id: &str, name: &str) -> IntegrationItem {
        IntegrationItem {
            id: id.to_string(),
            name: name.to_string(),
            item_type: None,
            creation_time: None,
            last_modified_time: None,
            url: None,
        }
    }

    /// Walk a state to `CredentialsReady` for the given provider.
    fn ready(provider: Provider) -> ConnectionState {
        let mut state = ConnectionState::new();
        state.select_provider(Some(provider));
        let epoch = state.epoch();
        assert!(state.begin_acquisition(epoch));
        assert!(state.publish_credentials(epoch, bundle(provider, "tok-1")));
        state
    }

    #[test]
    fn test_switching_providers_clears_credentials_and_load_state() {
        let mut state = ready(Provider::Notion);
        let epoch = state.epoch();
        state.begin_load().unwrap();
        assert!(state.complete_load(epoch, Ok(vec![item("1", "Page A")])));

        state.select_provider(Some(Provider::Airtable));

        assert_eq!(state.phase(), Phase::ProviderChosen);
        assert!(state.bundle().is_none());
        assert_eq!(*state.load_state(), LoadState::NotStarted);
        // No load possible until a bundle for Airtable is published
        assert!(state.begin_load().is_none());
    }

    #[test]
    fn test_repeated_triggers_issue_exactly_one_request() {
        let mut state = ready(Provider::Hubspot);
        assert!(state.begin_load().is_some());
        assert!(state.begin_load().is_none());
        assert!(state.begin_load().is_none());
        assert_eq!(*state.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_stale_credential_publish_is_discarded() {
        let mut state = ConnectionState::new();
        state.select_provider(Some(Provider::Notion));
        let old_epoch = state.epoch();
        assert!(state.begin_acquisition(old_epoch));

        // User switches while the Notion handshake is still in flight
        state.select_provider(Some(Provider::Hubspot));

        assert!(!state.publish_credentials(old_epoch, bundle(Provider::Notion, "late")));
        assert!(state.bundle().is_none());
        assert_eq!(state.phase(), Phase::ProviderChosen);
        assert_eq!(state.provider(), Some(Provider::Hubspot));
    }

    #[test]
    fn test_stale_load_completion_is_discarded() {
        let mut state = ready(Provider::Notion);
        let request = state.begin_load().unwrap();

        state.select_provider(Some(Provider::Airtable));

        assert!(!state.complete_load(request.epoch, Ok(vec![item("1", "Page A")])));
        assert_eq!(*state.load_state(), LoadState::NotStarted);
    }

    #[test]
    fn test_mistagged_bundle_is_rejected_even_with_a_current_epoch() {
        let mut state = ConnectionState::new();
        state.select_provider(Some(Provider::Notion));
        let epoch = state.epoch();
        assert!(state.begin_acquisition(epoch));

        assert!(!state.publish_credentials(epoch, bundle(Provider::Hubspot, "tok-x")));
        assert!(state.bundle().is_none());
    }

    #[test]
    fn test_last_published_bundle_wins() {
        let mut state = ready(Provider::Airtable);
        let epoch = state.epoch();
        assert!(state.publish_credentials(epoch, bundle(Provider::Airtable, "tok-2")));
        assert_eq!(
            state.bundle().unwrap().secret["access_token"],
            "tok-2"
        );
    }

    #[test]
    fn test_empty_result_is_distinct_from_not_started_and_failed() {
        let mut state = ready(Provider::Hubspot);
        let epoch = state.epoch();
        state.begin_load().unwrap();
        assert!(state.complete_load(epoch, Ok(vec![])));

        assert_eq!(*state.load_state(), LoadState::Loaded(vec![]));
        assert_ne!(*state.load_state(), LoadState::NotStarted);
        assert_ne!(
            *state.load_state(),
            LoadState::Failed(String::new())
        );
    }

    #[test]
    fn test_notion_happy_path() {
        let mut state = ConnectionState::new();
        state.select_provider(Some(Provider::Notion));
        let epoch = state.epoch();
        assert!(state.begin_acquisition(epoch));
        assert!(state.publish_credentials(
            epoch,
            CredentialBundle {
                provider: Provider::Notion,
                secret: json!({ "access_token": "tok-1" }),
            }
        ));
        assert_eq!(state.phase(), Phase::CredentialsReady);

        let request = state.begin_load().unwrap();
        assert_eq!(request.provider, Provider::Notion);
        assert_eq!(request.credentials["access_token"], "tok-1");

        assert!(state.complete_load(request.epoch, Ok(vec![item("1", "Page A")])));
        assert_eq!(
            *state.load_state(),
            LoadState::Loaded(vec![item("1", "Page A")])
        );
    }

    #[test]
    fn test_acquisition_failure_leaves_the_workflow_retryable() {
        let mut state = ConnectionState::new();
        state.select_provider(Some(Provider::Hubspot));
        let epoch = state.epoch();
        assert!(state.begin_acquisition(epoch));

        // e.g. the user cancelled the popup
        assert!(state.fail_acquisition(epoch));

        assert_eq!(state.phase(), Phase::ProviderChosen);
        assert!(state.bundle().is_none());
        assert!(state.begin_load().is_none());
        // The user may retry without re-selecting
        assert!(state.begin_acquisition(epoch));
    }

    #[test]
    fn test_stale_acquisition_failure_is_discarded() {
        let mut state = ConnectionState::new();
        state.select_provider(Some(Provider::Notion));
        let old_epoch = state.epoch();
        assert!(state.begin_acquisition(old_epoch));

        state.select_provider(Some(Provider::Airtable));
        let new_epoch = state.epoch();
        assert!(state.begin_acquisition(new_epoch));

        // Late failure from the abandoned Notion handshake
        assert!(!state.fail_acquisition(old_epoch));
        assert_eq!(state.phase(), Phase::CredentialsPending);
    }

    #[test]
    fn test_load_failure_captures_the_backend_detail_and_reenables_the_trigger() {
        let mut state = ready(Provider::Notion);
        let epoch = state.epoch();
        state.begin_load().unwrap();
        assert!(state.complete_load(epoch, Err("invalid token".to_string())));

        assert_eq!(
            *state.load_state(),
            LoadState::Failed("invalid token".to_string())
        );
        // A fresh trigger is accepted; the previous outcome is discarded
        assert!(state.begin_load().is_some());
        assert_eq!(*state.load_state(), LoadState::Loading);
    }

    #[test]
    fn test_clearing_the_selection_returns_to_no_selection() {
        let mut state = ready(Provider::Airtable);
        state.select_provider(None);

        assert_eq!(state.phase(), Phase::NoSelection);
        assert_eq!(state.provider(), None);
        assert!(state.bundle().is_none());
        assert!(state.begin_load().is_none());
    }
}
