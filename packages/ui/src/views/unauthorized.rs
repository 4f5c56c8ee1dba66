use dioxus::prelude::*;

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div {
            class: "page page-unauthorized",
            h2 { "Unauthorized" }
            p { "You do not have access to this page." }
        }
    }
}
