use serde::Deserialize;

/// Default backend endpoint for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration, resolved once at startup and passed to
/// [`ApiClient::new`](crate::ApiClient::new). Nothing reads the environment
/// after construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base URL from the `API_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`] when unset or empty.
    ///
    /// The variable is read at runtime first, then at compile time. Wasm
    /// targets have no process environment, so there the override must be
    /// baked in when the bundle is built (`API_URL=… dx build`); natively
    /// the runtime value wins.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var("API_URL").ok(), option_env!("API_URL"))
    }

    fn resolve(runtime: Option<String>, compile_time: Option<&str>) -> Self {
        let non_empty = |url: &String| !url.trim().is_empty();
        match runtime
            .filter(non_empty)
            .or_else(|| compile_time.map(str::to_string).filter(non_empty))
        {
            Some(base_url) => Self { base_url },
            None => Self::default(),
        }
    }

    /// Join a path (starting with `/`) onto the base URL, tolerating a
    /// trailing slash in the configured base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
