//! Object key parsing.
//!
//! Keys are split on `/` and empty segments are dropped, so leading, trailing
//! and repeated slashes never produce phantom path components.

/// Split a raw object key into its non-empty path segments.
///
/// # Examples
///
/// ```
/// use bucketsite_core::parse_key;
///
/// assert_eq!(parse_key("/docs//guide/"), vec!["docs", "guide"]);
/// assert!(parse_key("").is_empty());
/// ```
#[must_use]
pub fn parse_key(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Join path segments back into a normalized key.
#[must_use]
pub fn join_key<S: AsRef<str>>(parts: &[S]) -> String {
    let mut key = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            key.push('/');
        }
        key.push_str(part.as_ref());
    }
    key
}

/// Strip leading and trailing slashes, which is the comparison form used for
/// deduplication and parent lookup. `"/"` and `""` both normalize to `""`.
#[must_use]
pub fn normalize_key(key: &str) -> &str {
    key.trim_matches('/')
}
