use serde::{Deserialize, Serialize};

use crate::format::NumberFormat;
use crate::palette::PaletteChoice;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/";

const QUERY_ENDPOINT: &str = "query";

/// Client configuration shared by the browser app and the terminal client.
///
/// Each front-end fills this from its own sources (build-time env and
/// localStorage in the browser, file and env layers in the terminal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the query service, e.g. `http://10.0.0.5:8000/`.
    pub backend_url: String,
    pub palette: PaletteChoice,
    pub number_format: NumberFormat,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            palette: PaletteChoice::default(),
            number_format: NumberFormat::default(),
        }
    }
}

impl ChatConfig {
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into();
        self
    }

    /// Base URL with exactly one trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}/", self.backend_url.trim().trim_end_matches('/'))
    }

    /// Full URL of the query endpoint.
    pub fn query_url(&self) -> String {
        format!("{}{}", self.base_url(), QUERY_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_adds_missing_slash() {
        let config = ChatConfig::default().with_backend_url("http://10.0.0.5:8000");
        assert_eq!(config.query_url(), "http://10.0.0.5:8000/query");

        let config = ChatConfig::default().with_backend_url("http://10.0.0.5/");
        assert_eq!(config.query_url(), "http://10.0.0.5/query");
    }

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.query_url(), "http://localhost:8000/query");
        assert_eq!(config.palette, PaletteChoice::Multi);
        assert_eq!(config.number_format, NumberFormat::Grouped);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ChatConfig =
            serde_json::from_str(r#"{ "palette": "single", "number_format": "fixed" }"#).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.palette, PaletteChoice::Single);
        assert_eq!(config.number_format, NumberFormat::Fixed);
    }
}
