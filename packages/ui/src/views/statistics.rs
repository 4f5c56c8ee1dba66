use dioxus::prelude::*;

use crate::use_api;

#[component]
pub fn Statistics() -> Element {
    let api = use_api();

    let summary_api = api.clone();
    let summary = use_resource(move || {
        let api = summary_api.clone();
        async move { api.summary_statistics().await }
    });

    let monthly_api = api.clone();
    let monthly = use_resource(move || {
        let api = monthly_api.clone();
        async move { api.monthly_statistics().await }
    });

    let budget_api = api.clone();
    let budget = use_resource(move || {
        let api = budget_api.clone();
        async move { api.budget_statistics().await }
    });

    let by_category_api = api.clone();
    let by_category = use_resource(move || {
        let api = by_category_api.clone();
        async move { api.category_statistics().await }
    });

    rsx! {
        div {
            class: "page page-statistics",
            h2 { "Statistics" }

            section {
                h3 { "Summary" }
                {match &*summary.read() {
                    None => rsx! { p { class: "loading", "Loading…" } },
                    Some(Err(err)) => rsx! { p { class: "error", "Failed to load summary: {err}" } },
                    Some(Ok(s)) => rsx! {
                        div {
                            class: "stat-cards",
                            div { class: "stat-card",
                                span { class: "stat-label", "Expenses" }
                                span { class: "stat-value", "{s.expense_count}" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-label", "Total" }
                                span { class: "stat-value", "{s.total_amount:.2}" }
                            }
                            div { class: "stat-card",
                                span { class: "stat-label", "Average" }
                                span { class: "stat-value", "{s.average_amount:.2}" }
                            }
                        }
                    },
                }}
            }

            section {
                h3 { "All-time budget" }
                {match &*budget.read() {
                    None => rsx! { p { class: "loading", "Loading…" } },
                    Some(Err(err)) => rsx! { p { class: "error", "Failed to load budget: {err}" } },
                    Some(Ok(b)) => rsx! {
                        p {
                            "Total spent ever: "
                            span { class: "amount", "{b.total_spent_ever:.2}" }
                        }
                    },
                }}
            }

            section {
                h3 { "By category" }
                {match &*by_category.read() {
                    None => rsx! { p { class: "loading", "Loading…" } },
                    Some(Err(err)) => rsx! { p { class: "error", "Failed to load category breakdown: {err}" } },
                    Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "empty", "Nothing yet." } },
                    Some(Ok(rows)) => rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Category" }
                                    th { "Count" }
                                    th { "Total" }
                                    th { "Average" }
                                }
                            }
                            tbody {
                                for row in rows.iter() {
                                    tr {
                                        key: "{row.category}",
                                        td { "{row.category}" }
                                        td { "{row.expense_count}" }
                                        td { class: "amount", "{row.total_amount:.2}" }
                                        td { class: "amount", "{row.average_amount:.2}" }
                                    }
                                }
                            }
                        }
                    },
                }}
            }

            section {
                h3 { "Monthly" }
                {match &*monthly.read() {
                    None => rsx! { p { class: "loading", "Loading…" } },
                    Some(Err(err)) => rsx! { p { class: "error", "Failed to load monthly totals: {err}" } },
                    Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "empty", "Nothing yet." } },
                    Some(Ok(rows)) => rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Month" }
                                    th { "Total" }
                                }
                            }
                            tbody {
                                for row in rows.iter() {
                                    tr {
                                        key: "{row.month}",
                                        td { "{row.month}" }
                                        td { class: "amount", "{row.total_expenses:.2}" }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
