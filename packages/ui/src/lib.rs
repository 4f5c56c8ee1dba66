//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod views;

mod navbar;
pub use navbar::Navbar;

/// Get the shared [`api::ApiClient`] from context.
///
/// The application shell provides the client once at the root with
/// `use_context_provider`; every view fetches through this handle.
pub fn use_api() -> api::ApiClient {
    use_context::<api::ApiClient>()
}
