//! Error types for remarkup-report

/// Main error type for report-formatting operations
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Component key does not carry the configured project-key prefix
    #[error(
        "component key `{component_key}` does not start with project key `{project_key}`"
    )]
    ComponentKeyMismatch {
        /// The offending component key
        component_key: String,
        /// The configured project key
        project_key: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for report-formatting operations
pub type Result<T> = std::result::Result<T, ReportError>;
