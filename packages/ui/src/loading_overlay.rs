use dioxus::prelude::*;

/// Full-screen blocking overlay shown while a request is in flight.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            div {
                class: "loading-box",
                h3 { "Loading..." }
                p { "Please wait until it loads." }
            }
        }
    }
}
