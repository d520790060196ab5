//! Client configuration.

/// Base path of the backend REST API, relative to the page origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Log directive applied when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Absolute URL or origin-relative path of the API.
    pub api_base: String,
    /// `EnvFilter` directive for the tracing subscriber.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Whether `api_base` still needs an origin to become a full URL.
    pub fn is_relative(&self) -> bool {
        self.api_base.starts_with('/')
    }
}
