//! # API crate — REST client for the expense tracker backend
//!
//! Everything the frontends need to talk to the backend lives here: the
//! [`ApiConfig`] that resolves the base URL, the [`ApiClient`] exposing one
//! typed method per REST operation, and the [`Transport`] seam that lets
//! tests swap the reqwest-backed HTTP layer for an in-memory fake.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — list/get/create/update/delete for categories and expenses, plus statistics and audit-log reads |
//! | [`config`] | [`ApiConfig`] — base URL from `API_URL` with a local default |
//! | [`error`] | [`ApiError`] — network vs. HTTP-status vs. decode failures |
//! | [`models`] | Serde DTOs mirroring the backend's response shapes |
//! | [`transport`] | [`Transport`] trait, [`HttpTransport`] (reqwest) |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AuditLogEntry, BudgetInfo, Category, CategoryStatistics, CategoryUpdate, Expense,
    ExpenseUpdate, MonthlyTotal, NewCategory, NewExpense, SummaryStatistics,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
