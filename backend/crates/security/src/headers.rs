//! Security Headers
//!
//! The header set the pages ask for, plus a `<meta http-equiv>` rendering
//! for static hosting where the server cannot be configured. Meta tags are
//! an approximation: `X-Frame-Options` in particular is ignored by browsers
//! unless it arrives as a real header.

use serde::Serialize;

use crate::crypto::generate_nonce;
use crate::sanitize::sanitize;

/// A single header name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityHeader {
    pub name: &'static str,
    pub value: String,
}

/// Headers for a page whose inline scripts carry `nonce`
pub fn security_headers(nonce: &str) -> Vec<SecurityHeader> {
    let header = |name, value: String| SecurityHeader { name, value };
    vec![
        header(
            "Content-Security-Policy",
            format!(
                "default-src 'self'; script-src 'self' 'nonce-{nonce}'; \
                 style-src 'self' 'unsafe-inline'; img-src 'self' data:; \
                 font-src 'self' data:; connect-src 'self'"
            ),
        ),
        header("X-Content-Type-Options", "nosniff".to_string()),
        header("X-Frame-Options", "DENY".to_string()),
        header(
            "Referrer-Policy",
            "strict-origin-when-cross-origin".to_string(),
        ),
        header(
            "Permissions-Policy",
            "geolocation=(), microphone=(), camera=()".to_string(),
        ),
    ]
}

/// Render [`security_headers`] as meta tags, returning the nonce used
pub fn security_meta_tags() -> (String, String) {
    let nonce = generate_nonce();
    let tags = render_meta_tags(&security_headers(&nonce));
    (nonce, tags)
}

fn render_meta_tags(headers: &[SecurityHeader]) -> String {
    headers
        .iter()
        .map(|h| {
            format!(
                r#"<meta http-equiv="{}" content="{}">"#,
                h.name,
                sanitize(&h.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_carries_nonce() {
        let headers = security_headers("abc123");
        let csp = &headers[0];
        assert_eq!(csp.name, "Content-Security-Policy");
        assert!(csp.value.contains("script-src 'self' 'nonce-abc123'"));
        assert!(csp.value.starts_with("default-src 'self'; "));
    }

    #[test]
    fn test_header_set() {
        let names: Vec<_> = security_headers("n").iter().map(|h| h.name).collect();
        assert_eq!(
            names,
            vec![
                "Content-Security-Policy",
                "X-Content-Type-Options",
                "X-Frame-Options",
                "Referrer-Policy",
                "Permissions-Policy",
            ]
        );
    }

    #[test]
    fn test_meta_tags_escape_quotes() {
        let (nonce, tags) = security_meta_tags();
        assert_eq!(tags.lines().count(), 5);
        assert!(tags.contains(&format!("&#039;nonce-{nonce}&#039;")));
        assert!(tags.contains(r#"<meta http-equiv="X-Frame-Options" content="DENY">"#));
    }

    #[test]
    fn test_fresh_nonce_per_render() {
        let (a, _) = security_meta_tags();
        let (b, _) = security_meta_tags();
        assert_ne!(a, b);
    }
}
