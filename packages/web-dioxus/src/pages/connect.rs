//! Connect page
//!
//! The orchestrating page: identity fields, the provider selector, the
//! active provider's connect adapter, and the data panel once credentials
//! are ready. Changing the selection routes through the workflow context,
//! which clears the bundle and the previous load result before the new
//! adapter mounts.

use dioxus::prelude::*;

use crate::components::DataPanel;
use crate::integrations::{AirtableConnect, HubspotConnect, NotionConnect};
use crate::state::connection::Phase;
use crate::types::Provider;
use crate::workflow::use_workflow;

/// Connect page - pick a provider, authorize it, load its records
#[component]
pub fn Connect() -> Element {
    let wf = use_workflow();
    let mut identity = wf.identity;
    let provider = wf.provider();

    let user = identity.read().user.clone();
    let organization = identity.read().organization.clone();

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4 py-8",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Connect an Integration" }
                    p { class: "text-gray-600 text-sm", "Hublink" }
                }

                div {
                    class: "mb-4",
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "User"
                    }
                    input {
                        r#type: "text",
                        value: "{user}",
                        oninput: move |e| identity.write().user = e.value(),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500",
                    }
                }

                div {
                    class: "mb-4",
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Organization"
                    }
                    input {
                        r#type: "text",
                        value: "{organization}",
                        oninput: move |e| identity.write().organization = e.value(),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-amber-500",
                    }
                }

                div {
                    class: "mb-2",
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-2",
                        "Integration Type"
                    }
                    select {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-amber-500",
                        onchange: move |e| wf.select_provider(Provider::from_label(&e.value())),
                        option {
                            value: "",
                            selected: provider.is_none(),
                            "Select an integration..."
                        }
                        for p in Provider::variants() {
                            option {
                                value: p.label(),
                                selected: provider == Some(*p),
                                "{p.label()}"
                            }
                        }
                    }
                }

                match provider {
                    Some(Provider::Notion) => rsx! { NotionConnect {} },
                    Some(Provider::Airtable) => rsx! { AirtableConnect {} },
                    Some(Provider::Hubspot) => rsx! { HubspotConnect {} },
                    None => rsx! {},
                }

                if wf.phase() == Phase::CredentialsReady {
                    DataPanel {}
                }
            }
        }
    }
}
