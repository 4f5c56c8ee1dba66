//! Response and request shapes for the backend's REST resources.
//!
//! These mirror the server's JSON verbatim. The client performs no
//! validation of its own; timestamps stay as the ISO-8601 strings the
//! backend emits.

use serde::{Deserialize, Serialize};

/// An expense category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /categories/{id}`. Fields left `None` are not sent, so the
/// backend treats them as "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single expense. The backend embeds the owning category in its
/// responses; it is optional here because list variants may omit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub category_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Body of `POST /expenses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Body of `PUT /expenses/{id}`; every field optional, unset means keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// `GET /statistics/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStatistics {
    pub expense_count: i64,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// One row of `GET /statistics/monthly` (last twelve months).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTotal {
    pub month: String,
    pub total_expenses: f64,
}

/// `GET /statistics/budget` — running total maintained server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetInfo {
    pub budget_id: i64,
    pub total_spent_ever: f64,
}

/// One row of `GET /statistics/by-category`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStatistics {
    pub category: String,
    pub expense_count: i64,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// One row of `GET /audit-logs`, newest first. `old_*` fields are absent
/// for inserts and `new_*` fields for deletes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogEntry {
    pub log_id: i64,
    pub operation: String,
    #[serde(default)]
    pub expense_id: Option<i64>,
    #[serde(default)]
    pub old_amount: Option<f64>,
    #[serde(default)]
    pub new_amount: Option<f64>,
    #[serde(default)]
    pub old_description: Option<String>,
    #[serde(default)]
    pub new_description: Option<String>,
    #[serde(default)]
    pub old_date: Option<String>,
    #[serde(default)]
    pub new_date: Option<String>,
    #[serde(default)]
    pub old_category_id: Option<i64>,
    #[serde(default)]
    pub new_category_id: Option<i64>,
    pub log_timestamp: String,
}
