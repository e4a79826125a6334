//! Target URL validation and scheme defaulting.
//!
//! Inputs without a scheme get `https://` prefixed; inputs that already start
//! with `http` are stored byte-for-byte unchanged. Validation only requires
//! that the candidate parse as an absolute http(s) URL.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a raw URL and defaults its scheme.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. If the input does not start with `http`, it is prefixed with `https://`
/// 3. The candidate must parse as an absolute URL with an `http` or `https`
///    scheme
///
/// The returned string is the candidate itself, not the re-serialized parse
/// result, so already-schemed input round-trips unchanged.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for unparseable input and
/// [`UrlNormalizationError::UnsupportedProtocol`] for schemes like `httpx:`
/// that pass the prefix check but are not plain http(s).
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https_prefix() {
        let result = normalize_url("example.com");
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_bare_domain_with_path() {
        let result = normalize_url("example.com/some/path?q=1");
        assert_eq!(result.unwrap(), "https://example.com/some/path?q=1");
    }

    #[test]
    fn test_http_url_unchanged() {
        let result = normalize_url("http://example.com/path");
        assert_eq!(result.unwrap(), "http://example.com/path");
    }

    #[test]
    fn test_https_url_unchanged() {
        let result = normalize_url("https://EXAMPLE.com:8443/Path#frag");
        assert_eq!(result.unwrap(), "https://EXAMPLE.com:8443/Path#frag");
    }

    #[test]
    fn test_trims_whitespace() {
        let result = normalize_url("  https://example.com  ");
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            normalize_url("").unwrap_err(),
            UrlNormalizationError::Empty
        ));
        assert!(matches!(
            normalize_url("   ").unwrap_err(),
            UrlNormalizationError::Empty
        ));
    }

    #[test]
    fn test_rejects_unparseable() {
        let result = normalize_url("not a url");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_rejects_http_prefixed_garbage() {
        // Starts with "http", so no prefixing happens; it must then parse on
        // its own, which it does not.
        let result = normalize_url("httpexample");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_rejects_lookalike_scheme() {
        let result = normalize_url("httpx://example.com");
        assert!(matches!(
            result.unwrap_err(),
            UrlNormalizationError::UnsupportedProtocol
        ));
    }

    #[test]
    fn test_ftp_gets_prefixed_then_rejected() {
        // "ftp://..." does not start with "http", gets prefixed, and the
        // result no longer parses.
        let result = normalize_url("ftp://example.com/file.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_localhost_with_port() {
        let result = normalize_url("localhost:3000/test");
        assert_eq!(result.unwrap(), "https://localhost:3000/test");
    }

    #[test]
    fn test_ip_address() {
        let result = normalize_url("192.168.1.1:8080/api");
        assert_eq!(result.unwrap(), "https://192.168.1.1:8080/api");
    }
}
