//! URL path construction for OpenScale API routes.
//!
//! Route templates such as `/v2/data_sets/{data_set_id}/records/{record_id}`
//! are resolved by [`resolve_path`], which percent-encodes every substituted
//! value with [`encode_path_segment`].
//!
//! # Invariants
//! - A substituted value never introduces a new path segment: `/`, `?` and
//!   `#` are always encoded.
//! - An empty value for a placeholder is rejected before any request is built.
//!
//! # Example
//!
//! ```
//! use openscale_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("user/name");
//! assert_eq!(encoded, "user%2Fname");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

use crate::error::{ClientError, Result};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters with special meaning in URI
/// templates and query strings.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use openscale_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("data mart"), "data%20mart");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Substitute `{name}` placeholders in `template` with encoded values.
///
/// # Errors
///
/// - [`ClientError::Validation`] when a bound value is empty.
/// - [`ClientError::InvalidUrl`] when a placeholder has no binding or the
///   template has an unterminated `{`.
///
/// # Examples
///
/// ```
/// use openscale_client::endpoints::url_encoding::resolve_path;
///
/// let path = resolve_path(
///     "/v2/data_sets/{data_set_id}/records/{record_id}",
///     &[("data_set_id", "ds1"), ("record_id", "r1")],
/// )
/// .unwrap();
/// assert_eq!(path, "/v2/data_sets/ds1/records/r1");
/// ```
pub fn resolve_path(template: &str, params: &[(&str, &str)]) -> Result<String> {
    for (name, value) in params {
        if value.is_empty() {
            return Err(ClientError::Validation(format!("{name} must be provided")));
        }
    }

    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ClientError::InvalidUrl(format!("unterminated placeholder in {template}"))
        })?;
        let name = &after[..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                ClientError::InvalidUrl(format!("no value bound for {{{name}}} in {template}"))
            })?;
        resolved.push_str(&encode_path_segment(value));
        rest = &after[close + 1..];
    }
    resolved.push_str(rest);

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("simple"), "simple");
        assert_eq!(encode_path_segment("dm-123"), "dm-123");
        assert_eq!(encode_path_segment("my_index"), "my_index");
    }

    #[test]
    fn test_encode_slash() {
        assert_eq!(encode_path_segment("a/b/c"), "a%2Fb%2Fc");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("id%20x"), "id%2520x");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_special_chars() {
        assert_eq!(encode_path_segment("a{b}"), "a%7Bb%7D");
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(encode_path_segment("a+b,c;d"), "a%2Bb%2Cc%3Bd");
    }

    #[test]
    fn test_resolve_two_placeholders() {
        let path = resolve_path(
            "/v2/data_sets/{data_set_id}/records/{record_id}",
            &[("data_set_id", "ds1"), ("record_id", "r1")],
        )
        .unwrap();
        assert_eq!(path, "/v2/data_sets/ds1/records/r1");
    }

    #[test]
    fn test_resolve_empty_value_fails() {
        let err = resolve_path(
            "/v2/data_sets/{data_set_id}/records/{record_id}",
            &[("data_set_id", "ds1"), ("record_id", "")],
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg == "record_id must be provided"));
    }

    #[test]
    fn test_resolve_unbound_placeholder_fails() {
        let err = resolve_path("/v2/data_marts/{data_mart_id}", &[]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_resolve_encodes_values() {
        let path = resolve_path("/v2/user_preferences/{key}", &[("key", "a/b c")]).unwrap();
        assert_eq!(path, "/v2/user_preferences/a%2Fb%20c");
    }

    #[test]
    fn test_resolve_without_placeholders() {
        assert_eq!(resolve_path("/v2/data_marts", &[]).unwrap(), "/v2/data_marts");
    }
}
