//! bucketsite - static HTML index generator for S3 buckets.
//!
//! Lists every object in a bucket, rebuilds the folder hierarchy implied by
//! the keys, and writes one `index.html` per folder into the output
//! directory, optionally with a `sitemap.xml`.
//!
//! # Usage
//!
//! ```text
//! bucketsite --bucket my-bucket --output ./dist
//! bucketsite -b my-bucket --include-sitemap --domain https://files.example.com
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BUCKETSITE_BUCKET` | *(unset)* | Bucket to list (`--bucket`) |
//! | `BUCKETSITE_DOMAIN` | *(unset)* | Public site origin (`--domain`) |
//! | `AWS_REGION` | `us-east-1` | Region (`--region`) |
//! | `AWS_ACCESS_KEY_ID` | *(unset)* | Access key id (`--access-key-id`) |
//! | `AWS_SECRET_ACCESS_KEY` | *(unset)* | Secret access key (`--secret-access-key`) |
//! | `S3_ENDPOINT_URL` | *(unset)* | S3-compatible endpoint (`--endpoint`) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;
mod run;

use anyhow::{Context, Result};
use bucketsite_listing::S3Lister;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the configured level.
/// Logs go to stderr.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = Args::parse().into_config();

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    // Reject bad configuration before building a client.
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    info!(
        bucket = %config.bucket,
        output = %config.output.display(),
        include_sitemap = config.include_sitemap,
        version = VERSION,
        "starting bucketsite",
    );

    let lister = S3Lister::from_config(&config).await;
    if let Err(e) = run::run(&config, &lister).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
