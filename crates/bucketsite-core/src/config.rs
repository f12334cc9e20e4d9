//! Site generation configuration.
//!
//! A single [`SiteConfig`] is built once (normally from command-line flags)
//! and passed by reference to every stage that needs it. It is never mutated
//! after [`SiteConfig::validate`] succeeds.

use std::path::PathBuf;

use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::error::{SiteError, SiteResult};

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default number of keys requested per listing page.
pub const DEFAULT_PAGE_SIZE: i32 = 1000;

/// Site generation configuration.
///
/// # Examples
///
/// ```
/// use bucketsite_core::SiteConfig;
///
/// let config = SiteConfig::builder().bucket("my-bucket".into()).build();
/// assert_eq!(config.root_path, "/");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Bucket to list. Empty means unset.
    #[builder(default)]
    pub bucket: String,

    /// Region used for the default S3 URLs and the SDK client.
    #[builder(default = String::from(DEFAULT_REGION))]
    pub region: String,

    /// Access key id passed through to the storage client.
    #[builder(default)]
    pub access_key_id: Option<String>,

    /// Secret access key passed through to the storage client.
    #[builder(default)]
    #[serde(skip_serializing)]
    pub secret_access_key: Option<String>,

    /// Custom S3-compatible endpoint (e.g. `http://localhost:4566`).
    #[builder(default)]
    pub endpoint: Option<String>,

    /// Address objects as `host/bucket/key` instead of `bucket.host/key`.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Footer text rendered at the bottom of every page.
    #[builder(default)]
    pub footer: Option<String>,

    /// Site title; falls back to the bucket name.
    #[builder(default)]
    pub title: Option<String>,

    /// Output directory.
    #[builder(default = PathBuf::from("dist"))]
    pub output: PathBuf,

    /// Extra static assets copied into the output `assets/` directory.
    #[builder(default)]
    pub assets_dir: Option<PathBuf>,

    /// Verbose logging.
    #[builder(default = false)]
    pub verbose: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// List files whose name starts with `.`.
    #[builder(default = false)]
    pub include_hidden_files: bool,

    /// Write `sitemap.xml` at the output root.
    #[builder(default = false)]
    pub include_sitemap: bool,

    /// Public origin of the site, e.g. `https://files.example.com`.
    #[builder(default)]
    pub domain: Option<String>,

    /// Path under the domain where the site is served.
    #[builder(default = String::from("/"))]
    pub root_path: String,

    /// Keys requested per listing call.
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SiteConfig {
    /// Check the preconditions that must hold before anything is listed or
    /// written.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketsite_core::{SiteConfig, SiteError};
    ///
    /// let config = SiteConfig::builder()
    ///     .bucket("b".into())
    ///     .include_sitemap(true)
    ///     .build();
    /// assert!(matches!(config.validate(), Err(SiteError::MissingDomain)));
    /// ```
    pub fn validate(&self) -> SiteResult<()> {
        if self.bucket.trim().is_empty() {
            return Err(SiteError::MissingBucket);
        }
        if self.include_sitemap && self.domain().is_none() {
            return Err(SiteError::MissingDomain);
        }
        if let Some(domain) = self.domain() {
            if !is_http_url(domain) {
                return Err(SiteError::InvalidDomain(domain.to_owned()));
            }
        }
        if let Some(endpoint) = self.endpoint() {
            if !is_http_url(endpoint) {
                return Err(SiteError::InvalidEndpoint(endpoint.to_owned()));
            }
        }
        Ok(())
    }

    /// The configured domain, ignoring blank values.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        non_blank(self.domain.as_deref())
    }

    /// The configured endpoint, ignoring blank values.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.endpoint.as_deref())
    }

    /// Title shown in page headers.
    #[must_use]
    pub fn site_title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(&self.bucket)
    }

    /// The root path, defaulting to `/` when blank.
    #[must_use]
    pub fn root_path(&self) -> &str {
        non_blank(Some(self.root_path.as_str())).unwrap_or("/")
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
