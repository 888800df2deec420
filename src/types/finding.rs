//! Finding and severity types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding, from most to least severe.
///
/// The declaration order drives the derived `Ord`: sorting a batch
/// ascending yields the most severe findings first, matching the order in
/// which review comments are posted.
///
/// The enum is `#[non_exhaustive]` so that severity levels added by a
/// future analyzer version deserialize-side do not break downstream
/// matches; rendering falls back to the [`Major`](Severity::Major)
/// appearance for anything unrecognized.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Blocker level
    Blocker,
    /// Critical level
    Critical,
    /// Major level
    Major,
    /// Minor level
    Minor,
    /// Info level
    Info,
}

impl Severity {
    /// All known severities, most severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Info,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Blocker => write!(f, "blocker"),
            Severity::Critical => write!(f, "critical"),
            Severity::Minor => write!(f, "minor"),
            Severity::Info => write!(f, "info"),
            _ => write!(f, "major"),
        }
    }
}

/// A single code-quality issue to report.
///
/// Findings arrive from an external issue-collection collaborator and are
/// never mutated or stored by the formatter; each one is processed
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Severity level
    pub severity: Severity,

    /// Identifier of the file/module, starting with the project key
    /// followed by a separator (e.g. `myproj:src/Foo.java`)
    pub component_key: String,

    /// 1-based source line the finding points at
    pub line: usize,

    /// Free-form description of the issue
    pub message: String,

    /// Identifier of the violated rule (e.g. `java:S100`)
    pub rule_key: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {} [{}]",
            self.component_key, self.line, self.severity, self.message, self.rule_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order_most_severe_first() {
        let mut severities = vec![
            Severity::Info,
            Severity::Blocker,
            Severity::Minor,
            Severity::Critical,
            Severity::Major,
        ];
        severities.sort();
        assert_eq!(severities, Severity::ALL);
    }

    #[test]
    fn test_severity_wire_spelling() {
        let parsed: Severity = serde_json::from_str("\"BLOCKER\"").unwrap();
        assert_eq!(parsed, Severity::Blocker);
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"INFO\"");
    }

    #[test]
    fn test_finding_deserializes_camel_case() {
        let json = r#"{
            "severity": "MAJOR",
            "componentKey": "myproj:src/Foo.java",
            "line": 42,
            "message": "Rename this method",
            "ruleKey": "java:S100"
        }"#;
        let finding: Finding = serde_json::from_str(json).unwrap();
        assert_eq!(finding.severity, Severity::Major);
        assert_eq!(finding.component_key, "myproj:src/Foo.java");
        assert_eq!(finding.line, 42);
    }

    #[test]
    fn test_finding_display() {
        let finding = Finding {
            severity: Severity::Minor,
            component_key: "myproj:src/Foo.java".to_string(),
            line: 7,
            message: "Unused import".to_string(),
            rule_key: "java:S1128".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "myproj:src/Foo.java:7: minor Unused import [java:S1128]"
        );
    }
}
