use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "page page-not-found",
            h2 { "Page not found" }
            p { "No page exists at /{path}." }
        }
    }
}
