use dioxus::prelude::*;

#[component]
pub fn LoadingOverlay(message: String) -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-icon", "📊" }
            div { class: "loading-message", "{message}" }
            div { class: "loading-progress",
                div { class: "progress-bar" }
            }
        }
    }
}
