use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page page-home",
            h2 { "Welcome" }
            p { "Track your spending: manage categories and expenses, then check the statistics and audit trail." }
        }
    }
}
