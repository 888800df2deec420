//! Per-finding Remarkup rendering
//!
//! [`RemarkupFormatter`] holds the two resolved configuration values (rule
//! URL prefix and project key) and exposes pure formatting operations. It is
//! immutable after construction and safe for unrestricted concurrent use.

use crate::config::{Settings, resolve_base_url};
use crate::remarkup::{code, encode_for_url, icon, italics, link};
use crate::types::{Finding, ReportError, Result, Severity};

/// Renders findings as one-line Remarkup fragments.
#[derive(Debug, Clone)]
pub struct RemarkupFormatter {
    /// Normalized base URL for rule links, ending in `/`, or empty
    rule_url_prefix: String,
    /// Prefix stripped from component keys before display, possibly empty
    project_key: String,
}

impl RemarkupFormatter {
    /// Build a formatter from settings.
    ///
    /// The base URL resolves override-then-fallback and is normalized to
    /// end with `/`; the project key is stored verbatim. Missing values
    /// degrade to empty strings.
    pub fn new(settings: &Settings) -> Self {
        Self::from_parts(
            resolve_base_url(settings.base_url.as_deref(), settings.host_url.as_deref()),
            settings.project_key.clone().unwrap_or_default(),
        )
    }

    /// Build a formatter from already-resolved values.
    ///
    /// The rule URL prefix is still normalized, so callers may pass a base
    /// URL with or without its trailing `/`.
    pub fn from_parts(rule_url_prefix: impl Into<String>, project_key: impl Into<String>) -> Self {
        let prefix = rule_url_prefix.into();
        Self {
            rule_url_prefix: resolve_base_url(Some(&prefix), None),
            project_key: project_key.into(),
        }
    }

    /// The normalized rule-link base URL (may be empty).
    pub fn rule_url_prefix(&self) -> &str {
        &self.rule_url_prefix
    }

    /// The configured project key (may be empty).
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Render the icon directive for a severity.
    ///
    /// Major renders as the fallback appearance, and so does any severity
    /// this crate does not know about yet.
    pub fn severity_icon(&self, severity: Severity) -> String {
        match severity {
            Severity::Blocker => icon("bug", Some("red")),
            Severity::Critical => icon("arrow-circle-up", Some("red")),
            Severity::Minor => icon("info-circle", Some("green")),
            Severity::Info => icon("chevron-circle-down", Some("green")),
            _ => icon("chevron-circle-up", Some("red")),
        }
    }

    /// Render the source-location segment: `` //Line <n>// - `<path>`: ``.
    ///
    /// The component key is displayed with the project key and one
    /// separator character stripped from its start. An empty project key
    /// leaves the component key untouched; a component key that does not
    /// carry the prefix is malformed input and yields
    /// [`ReportError::ComponentKeyMismatch`].
    pub fn source_location(&self, component_key: &str, line: usize) -> Result<String> {
        let stripped = self.strip_project_key(component_key)?;
        Ok(format!(
            "{} - {}:",
            italics(&format!("Line {line}")),
            code(stripped)
        ))
    }

    fn strip_project_key<'a>(&self, component_key: &'a str) -> Result<&'a str> {
        if self.project_key.is_empty() {
            return Ok(component_key);
        }
        let mismatch = || ReportError::ComponentKeyMismatch {
            component_key: component_key.to_string(),
            project_key: self.project_key.clone(),
        };
        let rest = component_key
            .strip_prefix(&self.project_key)
            .ok_or_else(mismatch)?;
        // One separator character sits between the project key and the path
        let mut chars = rest.chars();
        match chars.next() {
            Some(_) => Ok(chars.as_str()),
            None => Err(mismatch()),
        }
    }

    /// Render a "View rule" link for a rule key.
    ///
    /// With an empty base URL the link still renders; its url is then just
    /// the host-less `coding_rules#rule_key=...` path.
    pub fn rule_link(&self, rule_key: &str) -> String {
        link(
            &format!(
                "{}coding_rules#rule_key={}",
                self.rule_url_prefix,
                encode_for_url(rule_key)
            ),
            "View rule",
        )
    }

    /// Render a finding as a single Remarkup line.
    ///
    /// Composition, space-separated: severity icon, source location,
    /// message, rule link. The message passes through unmodified —
    /// Remarkup-special characters in it are deliberately not escaped.
    pub fn render(&self, finding: &Finding) -> Result<String> {
        Ok(format!(
            "{} {} {} {}",
            self.severity_icon(finding.severity),
            self.source_location(&finding.component_key, finding.line)?,
            finding.message,
            self.rule_link(&finding.rule_key)
        ))
    }

    /// Render a finding for an inline comment.
    ///
    /// Inline comments are anchored to a file and line by the review tool,
    /// so the source-location segment is dropped and nothing can fail.
    pub fn render_inline(&self, finding: &Finding) -> String {
        format!(
            "{} {} {}",
            self.severity_icon(finding.severity),
            finding.message,
            self.rule_link(&finding.rule_key)
        )
    }

    /// Render a batch of findings, each independently.
    ///
    /// A malformed finding produces an `Err` in its slot and leaves the
    /// rest rendered.
    pub fn render_all<'a, I>(&self, findings: I) -> Vec<Result<String>>
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        findings.into_iter().map(|f| self.render(f)).collect()
    }
}
