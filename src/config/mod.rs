//! Settings parsing and base-URL resolution

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Result;

/// Connection settings handed over by the host at startup.
///
/// All three values are optional; missing configuration degrades (rule
/// links lose their host, source locations keep their prefix) instead of
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit base-URL override for rule links; wins over `host_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Fallback analysis-host URL, used when no override is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,

    /// Project key shared by all component keys of the analyzed project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
}

impl Settings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_yaml_ng::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some("json") => Self::from_json_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))
            }
        }
    }
}

/// Resolve the rule-link base URL from an explicit override and a fallback
/// host URL.
///
/// The override wins whenever it is set. A non-empty result is normalized
/// to end with `/`; when neither source provides a URL the result is empty
/// and link generation degrades to host-less paths.
pub fn resolve_base_url(override_url: Option<&str>, host_url: Option<&str>) -> String {
    let raw = override_url.or(host_url).unwrap_or("");
    if raw.is_empty() {
        return String::new();
    }
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_override() {
        let url = resolve_base_url(Some("http://a"), Some("http://b"));
        assert_eq!(url, "http://a/");
    }

    #[test]
    fn test_resolve_falls_back_to_host() {
        let url = resolve_base_url(None, Some("http://b/"));
        assert_eq!(url, "http://b/");
    }

    #[test]
    fn test_resolve_appends_slash_once() {
        assert_eq!(resolve_base_url(Some("http://a/"), None), "http://a/");
        assert_eq!(resolve_base_url(Some("http://a"), None), "http://a/");
    }

    #[test]
    fn test_resolve_empty_when_unconfigured() {
        assert_eq!(resolve_base_url(None, None), "");
        assert_eq!(resolve_base_url(Some(""), None), "");
    }

    #[test]
    fn test_settings_json_parsing() {
        let json = r#"{"base_url": "http://sonar", "project_key": "myproj"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://sonar"));
        assert_eq!(settings.host_url, None);
        assert_eq!(settings.project_key.as_deref(), Some("myproj"));
    }

    #[test]
    fn test_settings_toml_parsing() {
        let toml_src = "host_url = \"http://sonar\"\nproject_key = \"myproj\"\n";
        let settings: Settings = toml::from_str(toml_src).unwrap();
        assert_eq!(settings.host_url.as_deref(), Some("http://sonar"));
        assert_eq!(settings.base_url, None);
    }
}
