//! Externally visible URLs for tree nodes.
//!
//! Folders always link to their generated page under the root path. Files
//! link straight to the object: through the custom endpoint when one is
//! configured, otherwise through the public S3 host in either
//! virtual-hosted or path style.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::SiteConfig;
use crate::node::NodeKind;

/// Characters escaped inside a single path segment (RFC 3986 `pchar`
/// complement, plus `/` since segments never contain one).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Resolves node URLs from the deployment settings in a [`SiteConfig`].
#[derive(Debug, Clone, Copy)]
pub struct UrlResolver<'a> {
    config: &'a SiteConfig,
}

impl<'a> UrlResolver<'a> {
    /// Create a resolver bound to a configuration.
    #[must_use]
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Resolve the URL for a node of the given kind and path segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketsite_core::{NodeKind, SiteConfig, UrlResolver};
    ///
    /// let config = SiteConfig::builder()
    ///     .bucket("media".into())
    ///     .region("eu-west-1".into())
    ///     .build();
    /// let resolver = UrlResolver::new(&config);
    /// let parts = vec!["docs".to_owned(), "a.txt".to_owned()];
    ///
    /// assert_eq!(resolver.resolve(NodeKind::Folder, &parts[..1]), "/docs");
    /// assert_eq!(
    ///     resolver.resolve(NodeKind::File { hidden: false }, &parts),
    ///     "https://media.s3-eu-west-1.amazonaws.com/docs/a.txt"
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, kind: NodeKind, key_parts: &[String]) -> String {
        match kind {
            NodeKind::Folder => self.folder_url(key_parts),
            NodeKind::File { .. } => self.object_url(key_parts),
        }
    }

    /// Root-relative path of a folder page.
    #[must_use]
    pub fn folder_url(&self, key_parts: &[String]) -> String {
        join_path(self.config.root_path(), key_parts)
    }

    /// Absolute URL of an object.
    #[must_use]
    pub fn object_url(&self, key_parts: &[String]) -> String {
        let path = encode_parts(key_parts);
        let bucket = &self.config.bucket;
        if let Some(endpoint) = self.config.endpoint() {
            return format!("{}/{bucket}/{path}", endpoint.trim_end_matches('/'));
        }
        let region = &self.config.region;
        if self.config.force_path_style {
            format!("https://s3-{region}.amazonaws.com/{bucket}/{path}")
        } else {
            format!("https://{bucket}.s3-{region}.amazonaws.com/{path}")
        }
    }
}

/// Join a base path and encoded segments with single slashes.
#[must_use]
pub fn join_path(base: &str, key_parts: &[String]) -> String {
    if key_parts.is_empty() {
        return base.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), encode_parts(key_parts))
}

/// Collapse runs of `/` in the path part of a URL, leaving `scheme://` alone.
///
/// # Examples
///
/// ```
/// use bucketsite_core::url::collapse_slashes;
///
/// assert_eq!(
///     collapse_slashes("https://example.com//site///docs/index.html"),
///     "https://example.com/site/docs/index.html"
/// );
/// ```
#[must_use]
pub fn collapse_slashes(url: &str) -> String {
    let (scheme, rest) = match url.find("://") {
        Some(i) => url.split_at(i + 3),
        None => ("", url),
    };
    let mut out = String::with_capacity(url.len());
    out.push_str(scheme);
    let mut previous_slash = false;
    for c in rest.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        out.push(c);
    }
    out
}

fn encode_parts(key_parts: &[String]) -> String {
    key_parts
        .iter()
        .map(|part| utf8_percent_encode(part, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(key: &str) -> Vec<String> {
        crate::key::parse_key(key)
    }

    const FILE: NodeKind = NodeKind::File { hidden: false };

    #[test]
    fn test_should_resolve_folder_under_root_path() {
        let config = SiteConfig::builder().bucket("b".into()).build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(resolver.resolve(NodeKind::Folder, &parts("a/b")), "/a/b");
        assert_eq!(resolver.resolve(NodeKind::Folder, &[]), "/");

        let config = SiteConfig::builder()
            .bucket("b".into())
            .root_path("/files/".into())
            .build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(resolver.resolve(NodeKind::Folder, &parts("a")), "/files/a");
        assert_eq!(resolver.resolve(NodeKind::Folder, &[]), "/files/");
    }

    #[test]
    fn test_should_ignore_endpoint_for_folders() {
        let config = SiteConfig::builder()
            .bucket("b".into())
            .endpoint(Some("http://localhost:4566".into()))
            .build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(resolver.resolve(NodeKind::Folder, &parts("docs")), "/docs");
    }

    #[test]
    fn test_should_resolve_file_through_endpoint() {
        let config = SiteConfig::builder()
            .bucket("b".into())
            .endpoint(Some("http://localhost:4566/".into()))
            .force_path_style(false)
            .build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(
            resolver.resolve(FILE, &parts("docs/readme.md")),
            "http://localhost:4566/b/docs/readme.md"
        );
    }

    #[test]
    fn test_should_resolve_virtual_hosted_url() {
        let config = SiteConfig::builder()
            .bucket("media".into())
            .region("us-west-2".into())
            .build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(
            resolver.resolve(FILE, &parts("x/y.png")),
            "https://media.s3-us-west-2.amazonaws.com/x/y.png"
        );
    }

    #[test]
    fn test_should_resolve_path_style_url() {
        let config = SiteConfig::builder()
            .bucket("media".into())
            .region("us-west-2".into())
            .force_path_style(true)
            .build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(
            resolver.resolve(FILE, &parts("x/y.png")),
            "https://s3-us-west-2.amazonaws.com/media/x/y.png"
        );
    }

    #[test]
    fn test_should_encode_unsafe_segment_characters() {
        let config = SiteConfig::builder().bucket("b".into()).build();
        let resolver = UrlResolver::new(&config);
        assert_eq!(
            resolver.resolve(NodeKind::Folder, &parts("my docs/#1?")),
            "/my%20docs/%231%3F"
        );
        assert_eq!(
            resolver.resolve(NodeKind::Folder, &parts("café")),
            "/caf%C3%A9"
        );
    }

    #[test]
    fn test_should_be_deterministic() {
        let config = SiteConfig::builder().bucket("b".into()).build();
        let resolver = UrlResolver::new(&config);
        let p = parts("a/b/c");
        assert_eq!(resolver.resolve(FILE, &p), resolver.resolve(FILE, &p));
    }

    #[test]
    fn test_should_collapse_duplicate_slashes() {
        assert_eq!(collapse_slashes("http://a.com//b//c"), "http://a.com/b/c");
        assert_eq!(collapse_slashes("//x//y"), "/x/y");
        assert_eq!(collapse_slashes("https://a.com/"), "https://a.com/");
    }
}
