//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::workflow::WorkflowProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Workflow context wraps the entire app
        WorkflowProvider {
            Router::<Route> {}
        }
    }
}
