use std::cell::RefCell;

use dioxus::prelude::*;

use ui::views::{AuditLogs, Categories, Expenses, Home, NotFound, Statistics, Unauthorized};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavbarLayout)]
        #[route("/")]
        Home {},
        #[route("/categories")]
        Categories {},
        #[route("/expenses")]
        Expenses {},
        #[route("/statistics")]
        Statistics {},
        #[route("/audit")]
        AuditLogs {},
        #[route("/unauthorized")]
        Unauthorized {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client for the whole app; views reach it via ui::use_api().
    use_context_provider(|| api::ApiClient::new(api::ApiConfig::from_env()));

    rsx! {
        Router::<Route> {
            config: || {
                RouterConfig::<Route>::default().on_update(|state| {
                    log_transition(&state.current().to_string());
                    // Observe only, never redirect.
                    None
                })
            }
        }
    }
}

thread_local! {
    static LAST_PATH: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Navigation hook: logs every transition with its source and destination.
/// Records `to` as the new current path and returns the path it replaced.
fn log_transition(to: &str) -> Option<String> {
    let from = LAST_PATH.with(|last| last.borrow_mut().replace(to.to_string()));
    match from.as_deref() {
        Some(from) => tracing::debug!(%from, %to, "navigation"),
        None => tracing::debug!(%to, "initial navigation"),
    }
    from
}

#[component]
fn NavbarLayout() -> Element {
    rsx! {
        ui::Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Categories {}, "Categories" }
            Link { to: Route::Expenses {}, "Expenses" }
            Link { to: Route::Statistics {}, "Statistics" }
            Link { to: Route::AuditLogs {}, "Audit" }
        }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths_parse_to_their_views() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!("/categories".parse::<Route>().unwrap(), Route::Categories {});
        assert_eq!("/expenses".parse::<Route>().unwrap(), Route::Expenses {});
        assert_eq!("/statistics".parse::<Route>().unwrap(), Route::Statistics {});
        assert_eq!("/audit".parse::<Route>().unwrap(), Route::AuditLogs {});
        assert_eq!(
            "/unauthorized".parse::<Route>().unwrap(),
            Route::Unauthorized {}
        );
    }

    #[test]
    fn test_routes_render_back_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Categories {}.to_string(), "/categories");
        assert_eq!(Route::Expenses {}.to_string(), "/expenses");
        assert_eq!(Route::Statistics {}.to_string(), "/statistics");
        assert_eq!(Route::AuditLogs {}.to_string(), "/audit");
        assert_eq!(Route::Unauthorized {}.to_string(), "/unauthorized");
    }

    // Each test runs on its own thread, so LAST_PATH starts fresh here.
    #[test]
    fn test_navigation_hook_pairs_source_with_destination() {
        assert_eq!(log_transition("/"), None);
        assert_eq!(log_transition("/expenses"), Some("/".to_string()));
        assert_eq!(log_transition("/audit"), Some("/expenses".to_string()));
        // One recorded hop per call; the latest destination is now current.
        assert_eq!(
            LAST_PATH.with(|last| last.borrow().clone()),
            Some("/audit".to_string())
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        assert_eq!(
            "/no/such/page".parse::<Route>().unwrap(),
            Route::NotFound {
                segments: vec!["no".into(), "such".into(), "page".into()],
            }
        );
    }
}
