//! Original-URL validation.
//!
//! The mapping core stores URLs verbatim so that resolving a hash returns the
//! exact URL that was shortened. Input is validated, never rewritten.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates an original URL before it is shortened.
///
/// # Rules
///
/// 1. Must not be empty (or whitespace only)
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https` (rejects `javascript:`, `data:`,
///    `file:`, and other dangerous schemes)
/// 4. Must have a host component
///
/// The URL is intentionally not normalized: idempotence is keyed on the exact
/// string the caller submitted, and `resolve` must return it unchanged.
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule violated.
pub fn validate_original_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_original_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_original_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_and_query() {
        assert!(validate_original_url("https://example.com/a/b?c=d&e=f").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(
            validate_original_url(""),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_validate_whitespace_only() {
        assert!(matches!(
            validate_original_url("   "),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_validate_relative_url() {
        assert!(matches!(
            validate_original_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_javascript_scheme() {
        assert!(matches!(
            validate_original_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_file_scheme() {
        assert!(matches!(
            validate_original_url("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_data_scheme() {
        assert!(matches!(
            validate_original_url("data:text/html,<h1>hi</h1>"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_input_is_not_rewritten() {
        // Validation must accept without requiring canonical form; the exact
        // input string is what gets stored.
        assert!(validate_original_url("HTTPS://EXAMPLE.COM:443/Path#frag").is_ok());
    }
}
