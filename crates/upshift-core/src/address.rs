//! Site-address resolution and URL-shape validation.
//!
//! A site address is the host (and optional path) portion of a URL without
//! the scheme, e.g. `example.com` or `example.org/reader`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Why a site address cannot be redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// No address was configured and none could be derived from the page.
    #[error("site address is required")]
    Missing,
    /// The address does not look like a URL.
    #[error("invalid URL format: {address}")]
    InvalidFormat { address: String },
}

/// Shape of an acceptable site address: optional `http://`/`https://`
/// prefix, one or more dot-separated hostname labels (alphanumeric and
/// hyphen), a 2-6 letter top-level label, and an optional
/// path/query/fragment suffix starting with `/`.
static URL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?([A-Za-z0-9-]+\.)+[A-Za-z]{2,6}(/[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]*)?$",
    )
    .expect("URL shape pattern compiles")
});

/// Derives a site address from a full page address: everything after the
/// first `//`.
///
/// Returns `None` when there is no separator or nothing follows it.
pub fn derive_from_href(href: &str) -> Option<String> {
    match href.split_once("//") {
        Some((_, rest)) if !rest.is_empty() => Some(rest.to_string()),
        _ => None,
    }
}

/// Strips a leading `http://` or `https://` so a validated address can be
/// recomposed with any target scheme without doubling up.
pub fn strip_scheme_prefix(address: &str) -> &str {
    address
        .strip_prefix("https://")
        .or_else(|| address.strip_prefix("http://"))
        .unwrap_or(address)
}

/// Validates an address against the URL shape.
///
/// The empty string is [`AddressError::Missing`]; anything else that fails
/// the pattern is [`AddressError::InvalidFormat`].
pub fn validate(address: &str) -> Result<(), AddressError> {
    if address.is_empty() {
        return Err(AddressError::Missing);
    }
    if !URL_SHAPE.is_match(address) {
        return Err(AddressError::InvalidFormat {
            address: address.to_string(),
        });
    }
    Ok(())
}
