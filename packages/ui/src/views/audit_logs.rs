use dioxus::prelude::*;

use crate::use_api;

fn changed(old: Option<&str>, new: Option<&str>) -> String {
    match (old, new) {
        (Some(old), Some(new)) if old != new => format!("{old} → {new}"),
        (Some(old), Some(_)) => old.to_string(),
        (Some(old), None) => old.to_string(),
        (None, Some(new)) => new.to_string(),
        (None, None) => String::new(),
    }
}

#[component]
pub fn AuditLogs() -> Element {
    let api = use_api();

    let list_api = api.clone();
    let logs = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_audit_logs().await }
    });

    rsx! {
        div {
            class: "page page-audit",
            h2 { "Audit logs" }

            {match &*logs.read() {
                None => rsx! { p { class: "loading", "Loading audit logs…" } },
                Some(Err(err)) => rsx! { p { class: "error", "Failed to load audit logs: {err}" } },
                Some(Ok(entries)) if entries.is_empty() => rsx! {
                    p { class: "empty", "No audit entries." }
                },
                Some(Ok(entries)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "When" }
                                th { "Operation" }
                                th { "Expense" }
                                th { "Amount" }
                                th { "Description" }
                            }
                        }
                        tbody {
                            for entry in entries.iter() {
                                {
                                    let expense = entry
                                        .expense_id
                                        .map(|id| format!("#{id}"))
                                        .unwrap_or_default();
                                    let old_amount = entry.old_amount.map(|a| format!("{a:.2}"));
                                    let new_amount = entry.new_amount.map(|a| format!("{a:.2}"));
                                    let amount = changed(old_amount.as_deref(), new_amount.as_deref());
                                    let description = changed(
                                        entry.old_description.as_deref(),
                                        entry.new_description.as_deref(),
                                    );
                                    rsx! {
                                        tr {
                                            key: "{entry.log_id}",
                                            td { "{entry.log_timestamp}" }
                                            td { class: "operation", "{entry.operation}" }
                                            td { "{expense}" }
                                            td { class: "amount", "{amount}" }
                                            td { "{description}" }
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
