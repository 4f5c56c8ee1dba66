use api::NewExpense;
use dioxus::prelude::*;

use crate::use_api;

#[component]
pub fn Expenses() -> Element {
    let api = use_api();

    let list_api = api.clone();
    let mut expenses = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_expenses().await }
    });

    // Category list feeds the select in the create form.
    let categories_api = api.clone();
    let categories = use_resource(move || {
        let api = categories_api.clone();
        async move { api.list_categories().await }
    });

    let mut description = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);

    let create_api = api.clone();
    let create = move |_: MouseEvent| {
        let api = create_api.clone();
        async move {
            let desc = description().trim().to_string();
            if desc.is_empty() {
                action_error.set(Some("Description is required".to_string()));
                return;
            }
            let Ok(parsed_amount) = amount().trim().parse::<f64>() else {
                action_error.set(Some("Amount must be a number".to_string()));
                return;
            };
            let Ok(parsed_category) = category_id().parse::<i64>() else {
                action_error.set(Some("Pick a category".to_string()));
                return;
            };

            let new_expense = NewExpense {
                description: desc,
                amount: parsed_amount,
                category_id: parsed_category,
                date: None,
            };
            match api.create_expense(&new_expense).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "expense created");
                    description.set(String::new());
                    amount.set(String::new());
                    action_error.set(None);
                    expenses.restart();
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to create expense");
                    action_error.set(Some(err.to_string()));
                }
            }
        }
    };

    rsx! {
        div {
            class: "page page-expenses",
            h2 { "Expenses" }

            div {
                class: "form-row",
                input {
                    placeholder: "Description",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
                input {
                    placeholder: "Amount",
                    inputmode: "decimal",
                    value: "{amount}",
                    oninput: move |e| amount.set(e.value()),
                }
                select {
                    value: "{category_id}",
                    onchange: move |e| category_id.set(e.value()),
                    option { value: "", "Category…" }
                    {match &*categories.read() {
                        Some(Ok(list)) => rsx! {
                            for category in list.iter() {
                                option { value: "{category.id}", "{category.name}" }
                            }
                        },
                        _ => rsx! {},
                    }}
                }
                button { onclick: create, "Add expense" }
            }

            {action_error().map(|message| rsx! { p { class: "error", "{message}" } })}

            {match &*expenses.read() {
                None => rsx! { p { class: "loading", "Loading expenses…" } },
                Some(Err(err)) => rsx! { p { class: "error", "Failed to load expenses: {err}" } },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "empty", "No expenses recorded." }
                },
                Some(Ok(items)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Description" }
                                th { "Amount" }
                                th { "Category" }
                                th { "Date" }
                                th { "" }
                            }
                        }
                        tbody {
                            for expense in items.iter().cloned() {
                                {
                                    let delete_api = api.clone();
                                    let id = expense.id;
                                    let category_name = expense
                                        .category
                                        .as_ref()
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| format!("#{}", expense.category_id));
                                    let date = expense.date.clone().unwrap_or_default();
                                    rsx! {
                                        tr {
                                            key: "{id}",
                                            td { "{expense.description}" }
                                            td { class: "amount", "{expense.amount:.2}" }
                                            td { "{category_name}" }
                                            td { "{date}" }
                                            td {
                                                button {
                                                    class: "danger",
                                                    onclick: move |_| {
                                                        let api = delete_api.clone();
                                                        async move {
                                                            match api.delete_expense(id).await {
                                                                Ok(()) => expenses.restart(),
                                                                Err(err) => {
                                                                    tracing::warn!(%err, id, "failed to delete expense");
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
