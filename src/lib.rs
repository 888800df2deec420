//! # remarkup-report
//!
//! Formats structured code-review findings as [Phabricator Remarkup]
//! comment fragments, for posting to a differential revision by an
//! external review-comment collaborator.
//!
//! [Phabricator Remarkup]: https://secure.phabricator.com/book/phabricator/article/remarkup/
//!
//! ## Features
//!
//! - **Remarkup primitives** — bold, italics, inline code, icon directives,
//!   and titled links, reproduced token-for-token
//! - **Per-finding rendering** — one-line fragments combining a severity
//!   icon, source location, message, and "View rule" link
//! - **Inline fragments** for comments anchored to a file and line by the
//!   review tool itself
//! - **Summary building** — a multi-line digest with per-severity counts
//! - **Configuration** via JSON, YAML, or TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use remarkup_report::{Finding, RemarkupFormatter, Settings, Severity};
//!
//! let settings = Settings {
//!     host_url: Some("http://sonar.example.com".to_string()),
//!     project_key: Some("myproj".to_string()),
//!     ..Default::default()
//! };
//! let formatter = RemarkupFormatter::new(&settings);
//!
//! let finding = Finding {
//!     severity: Severity::Blocker,
//!     component_key: "myproj:src/main.rs".to_string(),
//!     line: 10,
//!     message: "Null pointer dereference".to_string(),
//!     rule_key: "rust:S100".to_string(),
//! };
//!
//! println!("{}", formatter.render(&finding)?);
//! # Ok::<(), remarkup_report::ReportError>(())
//! ```
//!
//! ## Configuration
//!
//! Settings can be loaded from a file or built directly:
//!
//! ```json
//! {
//!   "base_url": "https://sonar.example.com/sonarqube",
//!   "project_key": "myproj"
//! }
//! ```
//!
//! The base-URL override wins over `host_url` when both are present; the
//! resolved value is normalized to end with `/`. Missing configuration
//! degrades to empty strings rather than failing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod formatter;
pub mod remarkup;
pub mod report;
pub mod types;

// Re-export main types and functions
pub use config::{Settings, resolve_base_url};
pub use formatter::RemarkupFormatter;
pub use report::SummaryBuilder;
pub use types::{Finding, ReportError, Result, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
