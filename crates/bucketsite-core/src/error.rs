//! Error types for the bucketsite core.

/// Core error type: configuration problems detected before any work starts.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No bucket name was supplied.
    #[error("a bucket name is required (pass --bucket or set BUCKETSITE_BUCKET)")]
    MissingBucket,

    /// A sitemap was requested but no domain was configured.
    #[error("--include-sitemap requires a domain (pass --domain or set BUCKETSITE_DOMAIN)")]
    MissingDomain,

    /// The custom endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint: {0} (must start with http:// or https://)")]
    InvalidEndpoint(String),

    /// The domain is not an absolute http(s) URL.
    #[error("invalid domain: {0} (must start with http:// or https://)")]
    InvalidDomain(String),
}

/// Convenience result type for core operations.
pub type SiteResult<T> = Result<T, SiteError>;
