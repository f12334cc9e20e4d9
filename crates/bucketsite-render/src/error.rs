//! Emission error types.

use std::io;
use std::path::PathBuf;

use bucketsite_core::SiteError;
use bucketsite_sitemap::XmlError;

/// Errors raised while writing the site. Any one of them aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The configuration was rejected before anything was written.
    #[error(transparent)]
    Config(#[from] SiteError),

    /// A directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An asset could not be copied.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Walking the assets directory failed.
    #[error("failed to walk assets directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A walked path was not below the directory being copied.
    #[error("path escapes the copied directory: {}", .0.display())]
    OutsideRoot(PathBuf),

    /// A listing page and a static asset would be written to overlapping
    /// paths.
    #[error("listing page {} collides with static asset {}", page.display(), asset.display())]
    AssetCollision {
        /// Page path, relative to the output directory.
        page: PathBuf,
        /// Asset path, relative to the output directory.
        asset: PathBuf,
    },

    /// Sitemap serialization failed.
    #[error("failed to serialize sitemap: {0}")]
    Sitemap(#[from] XmlError),

    /// An emission task panicked or was cancelled.
    #[error("emission task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
