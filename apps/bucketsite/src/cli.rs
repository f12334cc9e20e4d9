//! Command-line arguments.

use std::path::PathBuf;

use bucketsite_core::SiteConfig;
use bucketsite_core::config::{DEFAULT_PAGE_SIZE, DEFAULT_REGION};
use clap::Parser;

/// Generate a static, browsable HTML index of an S3 bucket.
#[derive(Debug, Parser)]
#[command(name = "bucketsite", version, about)]
pub struct Args {
    /// Bucket to list
    #[arg(short, long, env = "BUCKETSITE_BUCKET", default_value = "")]
    pub bucket: String,

    /// AWS region
    #[arg(short, long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Custom S3-compatible endpoint, e.g. http://localhost:4566
    #[arg(short, long, env = "S3_ENDPOINT_URL")]
    pub endpoint: Option<String>,

    /// Use path-style object URLs (host/bucket/key)
    #[arg(long)]
    pub force_path_style: bool,

    /// Footer text shown on every page
    #[arg(long)]
    pub footer: Option<String>,

    /// Site title (defaults to the bucket name)
    #[arg(long)]
    pub title: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "./dist")]
    pub output: PathBuf,

    /// Directory of extra static assets copied into <output>/assets
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// List files whose name starts with a dot
    #[arg(long)]
    pub include_hidden_files: bool,

    /// Write sitemap.xml (requires --domain)
    #[arg(long)]
    pub include_sitemap: bool,

    /// Public origin of the site, e.g. https://files.example.com
    #[arg(short, long, env = "BUCKETSITE_DOMAIN")]
    pub domain: Option<String>,

    /// Path under the domain where the site is served
    #[arg(long, default_value = "/")]
    pub root_path: String,

    /// Keys requested per listing call
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(i32).range(1..=1000))]
    pub page_size: i32,
}

impl Args {
    /// Log filter to install: `--verbose` raises the configured level to
    /// `debug`.
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }

    /// Build the immutable run configuration.
    #[must_use]
    pub fn into_config(self) -> SiteConfig {
        let log_level = self.effective_log_level().to_owned();
        SiteConfig::builder()
            .bucket(self.bucket)
            .region(self.region)
            .access_key_id(self.access_key_id)
            .secret_access_key(self.secret_access_key)
            .endpoint(self.endpoint)
            .force_path_style(self.force_path_style)
            .footer(self.footer)
            .title(self.title)
            .output(self.output)
            .assets_dir(self.assets_dir)
            .verbose(self.verbose)
            .log_level(log_level)
            .include_hidden_files(self.include_hidden_files)
            .include_sitemap(self.include_sitemap)
            .domain(self.domain)
            .root_path(self.root_path)
            .page_size(self.page_size)
            .build()
    }
}
