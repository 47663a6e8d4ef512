//! Threat Detection
//!
//! Pattern heuristics that flag input shaped like SQL injection, markup or
//! script injection, or path traversal. This is an input-shape signal for
//! the UI, not a parser: expect false positives and false negatives.
//! Parameterized queries and per-context output encoding on the server
//! remain the real defense.
//!
//! Run the detector on raw input. Sanitized text contains `;` from its
//! entities and will trip the comment rule.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Which rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    /// A SQL keyword standing as a whole word (`DROP`, `UNION`, ...)
    SqlKeyword,
    /// `' OR '1'='1` style tautologies
    BooleanInjection,
    /// `--` or `;` followed by anything
    SqlComment,
    ScriptTag,
    EventHandler,
    JavascriptUri,
    PathTraversal,
}

impl ThreatKind {
    pub const ALL: [ThreatKind; 7] = [
        ThreatKind::SqlKeyword,
        ThreatKind::BooleanInjection,
        ThreatKind::SqlComment,
        ThreatKind::ScriptTag,
        ThreatKind::EventHandler,
        ThreatKind::JavascriptUri,
        ThreatKind::PathTraversal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatKind::SqlKeyword => "sql_keyword",
            ThreatKind::BooleanInjection => "boolean_injection",
            ThreatKind::SqlComment => "sql_comment",
            ThreatKind::ScriptTag => "script_tag",
            ThreatKind::EventHandler => "event_handler",
            ThreatKind::JavascriptUri => "javascript_uri",
            ThreatKind::PathTraversal => "path_traversal",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            ThreatKind::SqlKeyword => {
                r"(?i)\b(?:select|insert|update|delete|drop|union|alter|exec|create|truncate)\b"
            }
            ThreatKind::BooleanInjection => {
                r#"(?i)['"]\s*(?:or|and)\s+['"]?\w+['"]?\s*=\s*['"]?\w+"#
            }
            ThreatKind::SqlComment => r"--|;.*",
            ThreatKind::ScriptTag => r"(?i)<\s*/?\s*script\b",
            ThreatKind::EventHandler => r"(?i)\bon[a-z]+\s*=",
            ThreatKind::JavascriptUri => r"(?i)javascript\s*:",
            ThreatKind::PathTraversal => r"(?i)/?\.\.|%2e%2e",
        }
    }
}

impl std::fmt::Display for ThreatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static RULES: Lazy<Vec<(ThreatKind, Regex)>> = Lazy::new(|| {
    ThreatKind::ALL
        .iter()
        .filter_map(|&kind| match Regex::new(kind.pattern()) {
            Ok(regex) => Some((kind, regex)),
            Err(e) => {
                tracing::error!(rule = %kind, error = %e, "Threat pattern failed to compile");
                None
            }
        })
        .collect()
});

/// `true` if any rule matches; empty input never matches
pub fn detect_threat(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    RULES.iter().any(|(_, regex)| regex.is_match(input))
}

/// Every rule that matches, in rule order
pub fn scan(input: &str) -> Vec<ThreatKind> {
    if input.is_empty() {
        return Vec::new();
    }
    let found: Vec<ThreatKind> = RULES
        .iter()
        .filter(|(_, regex)| regex.is_match(input))
        .map(|(kind, _)| *kind)
        .collect();
    if !found.is_empty() {
        tracing::debug!(rules = ?found, "Suspicious input pattern");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(RULES.len(), ThreatKind::ALL.len());
    }

    #[test]
    fn test_reference_inputs() {
        assert!(detect_threat("'; DROP TABLE users; --"));
        assert!(!detect_threat("hello world"));
        assert!(detect_threat("../../etc/passwd"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!detect_threat(""));
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_sql_statements() {
        assert_eq!(scan("DROP TABLE accounts"), vec![ThreatKind::SqlKeyword]);
        assert_eq!(
            scan("1 UNION ALL SELECT password FROM users"),
            vec![ThreatKind::SqlKeyword]
        );
        assert!(scan("exec xp_cmdshell").contains(&ThreatKind::SqlKeyword));
        assert!(scan("insert into t values (1)").contains(&ThreatKind::SqlKeyword));
    }

    #[test]
    fn test_boolean_injection() {
        assert!(scan("admin' OR '1'='1").contains(&ThreatKind::BooleanInjection));
        assert!(scan("x\" or 1=1").contains(&ThreatKind::BooleanInjection));
        assert!(!detect_threat("Rock and roll"));
    }

    #[test]
    fn test_sql_comment_markers() {
        assert_eq!(scan("admin'--"), vec![ThreatKind::SqlComment]);
        assert!(scan("a; b").contains(&ThreatKind::SqlComment));
        assert!(!detect_threat("well - maybe"));
    }

    #[test]
    fn test_markup_injection() {
        assert!(scan("<script>alert(1)</script>").contains(&ThreatKind::ScriptTag));
        assert!(scan("< SCRIPT src=x>").contains(&ThreatKind::ScriptTag));
        assert!(scan("<img src=x onerror=alert(1)>").contains(&ThreatKind::EventHandler));
        assert!(scan("\" onMouseOver = \"steal()").contains(&ThreatKind::EventHandler));
        assert_eq!(scan("JavaScript:void(0)"), vec![ThreatKind::JavascriptUri]);
    }

    #[test]
    fn test_path_traversal() {
        assert_eq!(scan("..\\windows\\win.ini"), vec![ThreatKind::PathTraversal]);
        assert!(scan("/var/www/../secret").contains(&ThreatKind::PathTraversal));
        assert!(scan("%2E%2E%2Fetc").contains(&ThreatKind::PathTraversal));
        assert!(detect_threat(".."));
    }

    #[test]
    fn test_bare_sql_keywords() {
        for input in ["DROP users", "SELECT * ", "delete account", "1 UNION 2"] {
            assert!(scan(input).contains(&ThreatKind::SqlKeyword), "{input:?}");
        }
        assert!(detect_threat("I'd like to update my address"));
        assert!(!detect_threat("Dropbox updates are selected weekly"));
    }

    #[test]
    fn test_any_event_handler_attribute() {
        for input in [
            "<div onanimationstart=alert(1)>",
            "<body onbeforeunload=x()>",
            "<svg onbegin=alert(1)>",
        ] {
            assert_eq!(scan(input), vec![ThreatKind::EventHandler], "{input:?}");
        }
    }

    #[test]
    fn test_any_double_dot() {
        for input in ["Wait... what?", "a..b", "foo/..bar", "..hidden"] {
            assert_eq!(scan(input), vec![ThreatKind::PathTraversal], "{input:?}");
        }
    }

    #[test]
    fn test_ordinary_text_passes() {
        for input in [
            "John O'Brien",
            "jane.doe@example.com",
            "Please call me on Monday",
            "+1 (555) 010-9999",
            "Send the invoice to my new address",
        ] {
            assert!(!detect_threat(input), "{input:?} flagged as {:?}", scan(input));
        }
    }

    #[test]
    fn test_scan_reports_every_match() {
        let kinds = scan("'; DROP TABLE users; --");
        assert!(kinds.contains(&ThreatKind::SqlKeyword));
        assert!(kinds.contains(&ThreatKind::SqlComment));
        assert!(!kinds.contains(&ThreatKind::PathTraversal));
    }
}
