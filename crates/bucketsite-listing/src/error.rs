//! Listing error types.

/// Errors raised while listing a bucket. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// The storage API rejected or failed the request (missing bucket,
    /// bad credentials, network failure).
    #[error("failed to list bucket {bucket}: {message}")]
    Request {
        /// Bucket being listed.
        bucket: String,
        /// Full error chain from the SDK.
        message: String,
    },

    /// The lister returned the marker it was just given.
    #[error("listing did not advance past marker {0}")]
    RepeatedMarker(String),

    /// The storage API returned an object without a key.
    #[error("listing returned an object without a key")]
    MissingKey,
}

/// Convenience result type for listing operations.
pub type ListingResult<T> = Result<T, ListingError>;
