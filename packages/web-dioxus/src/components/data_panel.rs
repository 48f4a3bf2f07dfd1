//! Load trigger and results panel
//!
//! Mounted by the connect page once credentials are ready. One click issues
//! one load request; repeated clicks while a load is in flight are rejected
//! by the state machine, and the button is disabled anyway.

use dioxus::prelude::*;

use crate::components::LoadingDots;
use crate::integrations::{load_integration_items, server_error_detail};
use crate::state::connection::LoadState;
use crate::workflow::use_workflow;

#[component]
pub fn DataPanel() -> Element {
    let wf = use_workflow();
    let load = wf.load_state();
    let provider_label = wf.provider().map(|p| p.label()).unwrap_or("Integration");

    let is_loading = matches!(&load, LoadState::Loading);

    let handle_load = move |_| {
        let Some(request) = wf.begin_load() else {
            return;
        };
        spawn(async move {
            let result = load_integration_items(request.provider, request.credentials.clone())
                .await
                .map_err(server_error_detail);
            wf.complete_load(request.epoch, result);
        });
    };

    rsx! {
        div {
            class: "mt-6",

            button {
                r#type: "button",
                class: "w-full bg-stone-700 text-white py-2 px-4 rounded-md hover:bg-stone-800 focus:outline-none focus:ring-2 focus:ring-stone-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: is_loading,
                onclick: handle_load,
                if is_loading {
                    LoadingDots {}
                } else {
                    "Load Data From {provider_label}"
                }
            }

            match load {
                LoadState::Loaded(items) if !items.is_empty() => rsx! {
                    div {
                        class: "mt-4 bg-white rounded-lg border border-gray-200 divide-y divide-gray-200",
                        div {
                            class: "p-3",
                            p { class: "text-sm font-semibold text-gray-900", "Fetched Records" }
                        }
                        for item in items.iter() {
                            div {
                                class: "p-3",
                                p { class: "text-sm font-medium text-gray-900", "{item.name}" }
                                p { class: "text-xs text-gray-500", "ID: {item.id}" }
                                if let Some(kind) = &item.item_type {
                                    p { class: "text-xs text-gray-400", "{kind}" }
                                }
                            }
                        }
                    }
                },
                LoadState::Loaded(_) => rsx! {
                    div {
                        class: "mt-4 bg-white rounded-lg border border-gray-200 p-6 text-center",
                        p { class: "text-sm text-gray-500", "No records found." }
                    }
                },
                LoadState::Failed(detail) => rsx! {
                    div {
                        class: "mt-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                        "{detail}"
                    }
                },
                LoadState::Loading | LoadState::NotStarted => rsx! {},
            }
        }
    }
}
