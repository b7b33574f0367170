//! Client Configuration
//!
//! Where the todo service lives and how loud the console log is. Read once
//! at startup from `<meta>` tags on the host page.

use std::str::FromStr;

use log::Level;

/// Meta tag overriding the service base URL
pub const META_API_BASE: &str = "todo-api-base";
/// Meta tag setting the console log level
pub const META_LOG_LEVEL: &str = "todo-log-level";

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service base URL without trailing slash
    pub base_url: String,
    pub log_level: Level,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, log_level: Level) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Build from the page: meta overrides first, then the page origin.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        let meta = |name: &str| -> Option<String> {
            document
                .as_ref()?
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()?
                .get_attribute("content")
        };
        let origin = window
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        Self::resolve(meta(META_API_BASE), origin, meta(META_LOG_LEVEL))
    }

    /// Pick the effective settings from raw page values
    pub fn resolve(meta_base: Option<String>, origin: String, meta_level: Option<String>) -> Self {
        let base = meta_base
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or(origin);
        Self::new(base, parse_level(meta_level.as_deref()))
    }

    /// Absolute URL for a service path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = ClientConfig::new("http://localhost:8080/", Level::Info);
        assert_eq!(config.endpoint("/todos"), "http://localhost:8080/todos");
        assert_eq!(config.endpoint("add"), "http://localhost:8080/add");
    }

    #[test]
    fn test_meta_base_overrides_origin() {
        let config = ClientConfig::resolve(
            Some("https://api.example.com/v1/".into()),
            "http://localhost:3000".into(),
            None,
        );
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.endpoint("/del"), "https://api.example.com/v1/del");
    }

    #[test]
    fn test_blank_meta_base_falls_back_to_origin() {
        let config = ClientConfig::resolve(Some("  ".into()), "http://localhost:3000".into(), None);
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_log_level_parsing() {
        let origin = || "http://localhost".to_string();
        assert_eq!(ClientConfig::resolve(None, origin(), Some("debug".into())).log_level, Level::Debug);
        assert_eq!(ClientConfig::resolve(None, origin(), Some("WARN".into())).log_level, Level::Warn);
        assert_eq!(ClientConfig::resolve(None, origin(), Some("loud".into())).log_level, Level::Info);
        assert_eq!(ClientConfig::resolve(None, origin(), None).log_level, Level::Info);
    }
}
