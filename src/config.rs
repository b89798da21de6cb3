//! Configuration types for paginators
//!
//! This module contains the options a grid passes when it sets up
//! pagination, loadable from YAML or JSON. Field-name mappings are merged
//! with their defaults field by field at load time and never change after.

use crate::error::{Error, Result};
use crate::http::{HttpTransportConfig, RateLimiterConfig};
use crate::pagination::PaginationMode;
use crate::remote::{ReceivedFieldNames, SentFieldNames};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Row height used to derive a page size from the viewport
pub const DEFAULT_ROW_HEIGHT: u32 = 24;

// ============================================================================
// Top-Level Options
// ============================================================================

/// Complete paginator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Data sourcing mode
    #[serde(default)]
    pub mode: PaginationMode,

    /// Rows per page; derived from the viewport when absent
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Number of page buttons to show
    #[serde(default = "default_button_count")]
    pub button_count: u32,

    /// Parameter names for outgoing requests
    #[serde(default)]
    pub data_sent: SentFieldNames,

    /// Property names of incoming responses
    #[serde(default)]
    pub data_received: ReceivedFieldNames,

    /// Delay between progressive load requests
    #[serde(default)]
    pub progressive_load_delay_ms: u64,

    /// Extra pixels progressive scroll keeps loaded below the viewport
    #[serde(default)]
    pub progressive_scroll_margin: Option<u32>,

    /// Remote endpoint
    #[serde(default)]
    pub url: Option<String>,

    /// Persistent parameters sent with every request
    #[serde(default)]
    pub params: JsonObject,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpOptions,
}

fn default_button_count() -> u32 {
    5
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            mode: PaginationMode::default(),
            page_size: None,
            button_count: default_button_count(),
            data_sent: SentFieldNames::default(),
            data_received: ReceivedFieldNames::default(),
            progressive_load_delay_ms: 0,
            progressive_scroll_margin: None,
            url: None,
            params: JsonObject::new(),
            http: HttpOptions::default(),
        }
    }
}

impl PaginationOptions {
    /// Create options for a mode with everything else defaulted
    pub fn new(mode: PaginationMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the button count
    #[must_use]
    pub fn with_button_count(mut self, count: u32) -> Self {
        self.button_count = count;
        self
    }

    /// Set the remote endpoint
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Parse and validate YAML options
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate JSON options
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.button_count == 0 {
            return Err(Error::invalid_value("button_count", "must be at least 1"));
        }

        if self.page_size == Some(0) {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }

        if self.mode.is_remote() && self.url.as_deref().is_some_and(str::is_empty) {
            return Err(Error::invalid_value("url", "must not be empty"));
        }

        Ok(())
    }

    /// Page size, falling back to as many rows as fit the viewport
    pub fn resolve_page_size(&self, client_height: u32) -> u32 {
        self.page_size
            .unwrap_or_else(|| (client_height / DEFAULT_ROW_HEIGHT).max(1))
    }

    pub fn progressive_load_delay(&self) -> Duration {
        Duration::from_millis(self.progressive_load_delay_ms)
    }
}

// ============================================================================
// HTTP Options
// ============================================================================

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpOptions {
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Rate limit; none disables limiting
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            rate_limit: None,
        }
    }
}

impl HttpOptions {
    /// Transport configuration for these options
    pub fn to_transport_config(&self) -> HttpTransportConfig {
        let builder = HttpTransportConfig::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .max_retries(self.max_retries);

        match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = PaginationOptions::default();
        assert_eq!(options.mode, PaginationMode::Local);
        assert_eq!(options.button_count, 5);
        assert_eq!(options.page_size, None);
        assert_eq!(options.data_received.last_page, "last_page");
        assert_eq!(options.progressive_load_delay(), Duration::ZERO);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_yaml_with_partial_field_names() {
        let yaml = r"
mode: remote
page_size: 20
url: https://api.example.com/rows
data_sent:
  page: p
data_received:
  last_page: total_pages
  data: rows
params:
  token: abc
";
        let options = PaginationOptions::from_yaml_str(yaml).unwrap();

        assert_eq!(options.mode, PaginationMode::Remote);
        assert_eq!(options.page_size, Some(20));
        assert_eq!(options.data_sent.page, "p");
        assert_eq!(options.data_sent.size, "size");
        assert_eq!(options.data_received.last_page, "total_pages");
        assert_eq!(options.data_received.data, "rows");
        assert_eq!(options.data_received.current_page, "current_page");
        assert_eq!(options.params["token"], "abc");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = PaginationOptions::from_json_str(r#"{"mode": "infinite"}"#).unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
        assert!(err.to_string().contains("No such pagination mode: infinite"));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let err = PaginationOptions::default()
            .with_button_count(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { field, .. } if field == "button_count"));

        let err = PaginationOptions::from_yaml_str("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { field, .. } if field == "page_size"));
    }

    #[test]
    fn test_resolve_page_size() {
        let options = PaginationOptions::default();
        assert_eq!(options.resolve_page_size(480), 20);
        assert_eq!(options.resolve_page_size(10), 1);
        assert_eq!(options.with_page_size(7).resolve_page_size(480), 7);
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("options.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(file, r#"{{"mode": "progressive_load", "progressive_load_delay_ms": 50}}"#).unwrap();

        let options = PaginationOptions::from_file(&json_path).unwrap();
        assert_eq!(options.mode, PaginationMode::ProgressiveLoad);
        assert_eq!(options.progressive_load_delay(), Duration::from_millis(50));

        let yaml_path = dir.path().join("options.yaml");
        std::fs::write(&yaml_path, "mode: progressive_scroll\nprogressive_scroll_margin: 300\n")
            .unwrap();
        let options = PaginationOptions::from_file(&yaml_path).unwrap();
        assert_eq!(options.mode, PaginationMode::ProgressiveScroll);
        assert_eq!(options.progressive_scroll_margin, Some(300));

        let err = PaginationOptions::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_http_options_to_transport_config() {
        let http = HttpOptions {
            timeout_ms: 1500,
            max_retries: 1,
            rate_limit: Some(RateLimiterConfig::new(4, 4)),
        };
        let config = http.to_transport_config();
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(4, 4)));

        assert!(HttpOptions::default().to_transport_config().rate_limit.is_none());
    }
}
