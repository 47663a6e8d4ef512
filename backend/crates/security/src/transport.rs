//! Transport checks

use url::Url;

/// `true` if the page location was served over HTTPS
///
/// Anything that does not parse as an absolute URL is treated as insecure.
pub fn is_secure_connection(location: &str) -> bool {
    match Url::parse(location.trim()) {
        Ok(url) => url.scheme() == "https",
        Err(e) => {
            tracing::debug!(location = %location, error = %e, "Unparseable page location");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_is_secure() {
        assert!(is_secure_connection("https://paystream.example/dashboard"));
        assert!(is_secure_connection("HTTPS://paystream.example"));
    }

    #[test]
    fn test_other_schemes_are_not() {
        assert!(!is_secure_connection("http://localhost:8080/"));
        assert!(!is_secure_connection("file:///index.html"));
        assert!(!is_secure_connection("wss://paystream.example/socket"));
    }

    #[test]
    fn test_garbage_is_not() {
        assert!(!is_secure_connection(""));
        assert!(!is_secure_connection("/relative/path"));
        assert!(!is_secure_connection("https//missing-colon"));
    }
}
