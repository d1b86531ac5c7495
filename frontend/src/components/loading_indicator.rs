use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(message: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "loading-state",
            style: "color:black; font-size: 20px; padding: 10px; margin: 15px; text-align: center;",
            "{message}"
        }
    }
}
