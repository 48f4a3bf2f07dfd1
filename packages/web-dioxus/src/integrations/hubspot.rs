//! HubSpot connect adapter
//!
//! Same handshake as the others, with one extra check: HubSpot's token
//! exchange must have produced an `access_token`, otherwise the load
//! endpoint would reject the bundle later anyway.

use dioxus::prelude::*;

use crate::state::connection::Phase;
use crate::types::{CredentialBundle, Provider};
use crate::workflow::use_workflow;

use super::oauth::run_handshake;

#[component]
pub fn HubspotConnect() -> Element {
    let wf = use_workflow();
    let mut notice = use_signal(|| None::<String>);

    let is_pending = wf.phase() == Phase::CredentialsPending;
    let is_connected = wf.phase() == Phase::CredentialsReady;

    let handle_connect = move |_| {
        let epoch = wf.epoch();
        if !wf.begin_acquisition(epoch) {
            return;
        }
        notice.set(None);

        let identity = wf.identity.read().clone();
        spawn(async move {
            let outcome = run_handshake(Provider::Hubspot, identity).await.and_then(
                |secret| {
                    if secret.get("access_token").is_some() {
                        Ok(secret)
                    } else {
                        Err(super::oauth::AcquireError::Backend(
                            "HubSpot did not return an access token. Try connecting again."
                                .to_string(),
                        ))
                    }
                },
            );

            match outcome {
                Ok(secret) => {
                    wf.publish_credentials(
                        epoch,
                        CredentialBundle {
                            provider: Provider::Hubspot,
                            secret,
                        },
                    );
                }
                Err(e) => {
                    if wf.fail_acquisition(epoch) {
                        notice.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    let button_label = if is_connected {
        "HubSpot Connected"
    } else if is_pending {
        "Connecting..."
    } else {
        "Connect to HubSpot"
    };

    rsx! {
        div {
            class: "mt-4",

            if let Some(msg) = notice() {
                div {
                    class: "mb-3 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                    "{msg}"
                }
            }

            button {
                r#type: "button",
                class: "w-full bg-amber-700 text-white py-2 px-4 rounded-md hover:bg-amber-800 focus:outline-none focus:ring-2 focus:ring-amber-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: is_pending || is_connected,
                onclick: handle_connect,
                "{button_label}"
            }
        }
    }
}
