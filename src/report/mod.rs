//! Review summary building
//!
//! Accumulates findings and renders a multi-line Remarkup digest suitable
//! for posting as the top-level comment of a review, alongside the
//! per-finding inline comments.

use crate::formatter::RemarkupFormatter;
use crate::remarkup::{bold, icon, italics};
use crate::types::{Finding, Severity};

/// Default heading of a summary.
const DEFAULT_TITLE: &str = "Code analysis summary";

/// Accumulates findings into a Remarkup summary.
///
/// Layout produced by [`summarize`](SummaryBuilder::summarize):
///
/// ```text
/// **Code analysis summary**
/// {icon bug color=red} 1 blocker, {icon chevron-circle-up color=red} 2 major
/// {icon bug color=red} //Line 3// - `src/a.rs`: ... [[...|View rule]]
/// ...
/// ```
///
/// Findings are listed most severe first, ties broken by component key and
/// line. With nothing added, the summary carries a green check instead of
/// counts.
pub struct SummaryBuilder<'a> {
    formatter: &'a RemarkupFormatter,
    title: String,
    findings: Vec<Finding>,
}

impl<'a> SummaryBuilder<'a> {
    /// Create an empty builder rendering through `formatter`.
    pub fn new(formatter: &'a RemarkupFormatter) -> Self {
        Self {
            formatter,
            title: DEFAULT_TITLE.to_string(),
            findings: Vec::new(),
        }
    }

    /// Replace the summary heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add one finding to the summary.
    pub fn add(&mut self, finding: Finding) -> &mut Self {
        self.findings.push(finding);
        self
    }

    /// Number of findings added so far.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// True when no findings were added.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render the accumulated findings as a Remarkup summary.
    ///
    /// Malformed findings (component key without the project prefix) are
    /// skipped from the listing and reported in a trailing italic note;
    /// they never abort the summary.
    pub fn summarize(&self) -> String {
        let mut lines = vec![bold(&self.title)];

        if self.findings.is_empty() {
            lines.push(format!("{} No issues found", icon("check", Some("green"))));
            return lines.join("\n");
        }

        lines.push(self.count_line());

        let mut sorted: Vec<&Finding> = self.findings.iter().collect();
        sorted.sort_by(|a, b| {
            (a.severity, &a.component_key, a.line).cmp(&(b.severity, &b.component_key, b.line))
        });

        let mut skipped = 0usize;
        for finding in sorted {
            match self.formatter.render(finding) {
                Ok(rendered) => lines.push(rendered),
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            lines.push(italics(&format!(
                "{skipped} finding(s) with a malformed component key were omitted"
            )));
        }

        lines.join("\n")
    }

    /// Per-severity counts, most severe first, zero counts omitted.
    fn count_line(&self) -> String {
        Severity::ALL
            .iter()
            .filter_map(|&severity| {
                let count = self
                    .findings
                    .iter()
                    .filter(|f| f.severity == severity)
                    .count();
                if count == 0 {
                    return None;
                }
                Some(format!(
                    "{} {count} {severity}",
                    self.formatter.severity_icon(severity)
                ))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
