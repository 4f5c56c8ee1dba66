use api::NewCategory;
use dioxus::prelude::*;

use crate::use_api;

#[component]
pub fn Categories() -> Element {
    let api = use_api();

    let list_api = api.clone();
    let mut categories = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_categories().await }
    });

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);

    let create_api = api.clone();
    let create = move |_: MouseEvent| {
        let api = create_api.clone();
        async move {
            let trimmed = name().trim().to_string();
            if trimmed.is_empty() {
                action_error.set(Some("Name is required".to_string()));
                return;
            }
            let new_category = NewCategory {
                name: trimmed,
                description: {
                    let d = description().trim().to_string();
                    (!d.is_empty()).then_some(d)
                },
            };
            match api.create_category(&new_category).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "category created");
                    name.set(String::new());
                    description.set(String::new());
                    action_error.set(None);
                    categories.restart();
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to create category");
                    action_error.set(Some(err.to_string()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "page page-categories",
            h2 { "Categories" }

            div {
                class: "form-row",
                input {
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    placeholder: "Description (optional)",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
                button { onclick: create, "Add category" }
            }

            {action_error().map(|message| rsx! { p { class: "error", "{message}" } })}

            {match &*categories.read() {
                None => rsx! { p { class: "loading", "Loading categories…" } },
                Some(Err(err)) => rsx! { p { class: "error", "Failed to load categories: {err}" } },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "empty", "No categories yet." }
                },
                Some(Ok(items)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                                th { "" }
                            }
                        }
                        tbody {
                            for category in items.iter().cloned() {
                                {
                                    let delete_api = api.clone();
                                    let id = category.id;
                                    let desc = category.description.clone().unwrap_or_default();
                                    rsx! {
                                        tr {
                                            key: "{id}",
                                            td { "{category.name}" }
                                            td { "{desc}" }
                                            td {
                                                button {
                                                    class: "danger",
                                                    onclick: move |_| {
                                                        let api = delete_api.clone();
                                                        async move {
                                                            match api.delete_category(id).await {
                                                                Ok(()) => categories.restart(),
                                                                Err(err) => {
                                                                    tracing::warn!(%err, id, "failed to delete category");
                                                                    action_error.set(Some(err.to_string()));
                                                                }
                                                            }
                                                        }
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
