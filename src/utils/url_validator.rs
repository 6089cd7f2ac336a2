//! Long URL validation.
//!
//! The HTTP boundary validates request bodies with `validator`; the service
//! layer re-checks with [`validate_long_url`] before anything reaches the store.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Errors that can occur while validating a URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Checks that `input` is a well-formed absolute `http`/`https` URL.
///
/// The input is not rewritten; a valid URL is stored exactly as given.
///
/// # Errors
///
/// Returns [`UrlValidationError`] describing the first rule violated.
pub fn check_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

/// Validates a long URL, reporting failures as [`AppError::Validation`].
pub fn validate_long_url(input: &str) -> Result<(), AppError> {
    check_long_url(input).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "long_url": input, "reason": e.to_string() }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_long_url("https://www.example.com/").is_ok());
        assert!(check_long_url("http://example.com/path?q=1#frag").is_ok());
        assert!(check_long_url("https://example.com:8443").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(check_long_url(""), Err(UrlValidationError::Empty));
        assert_eq!(check_long_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(matches!(
            check_long_url("not-a-valid-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            check_long_url("/relative/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            check_long_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            check_long_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_validate_long_url_maps_to_validation_error() {
        let err = validate_long_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
