//! S3 lister backed by `aws-sdk-s3`.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::Object;
use bucketsite_core::{ObjectEntry, SiteConfig};
use chrono::DateTime;
use tracing::{debug, info};

use crate::error::{ListingError, ListingResult};
use crate::{ListPage, ObjectLister};

/// Name reported for credentials passed on the command line.
const CREDENTIALS_SOURCE: &str = "bucketsite-config";

/// Lists a bucket with `ListObjectsV2`.
#[derive(Debug, Clone)]
pub struct S3Lister {
    client: Client,
    bucket: String,
    page_size: i32,
}

impl S3Lister {
    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: Client, bucket: impl Into<String>, page_size: i32) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            page_size,
        }
    }

    /// Build a client from the site configuration.
    ///
    /// Explicit keys are used as static credentials; otherwise the default
    /// AWS provider chain (environment, profile, instance metadata) applies.
    pub async fn from_config(config: &SiteConfig) -> Self {
        let region = Region::new(config.region.clone());
        let mut builder = match (&config.access_key_id, &config.secret_access_key) {
            (Some(key_id), Some(secret)) => aws_sdk_s3::config::Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(Credentials::new(
                    key_id.clone(),
                    secret.clone(),
                    None,
                    None,
                    CREDENTIALS_SOURCE,
                )),
            _ => {
                let shared = aws_config::defaults(BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await;
                aws_sdk_s3::config::Builder::from(&shared)
            }
        };

        if let Some(endpoint) = config.endpoint() {
            builder = builder.endpoint_url(endpoint);
        }
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }

        info!(
            bucket = %config.bucket,
            region = %config.region,
            endpoint = config.endpoint().unwrap_or("aws"),
            force_path_style = config.force_path_style,
            "configured S3 client"
        );

        Self::new(
            Client::from_conf(builder.build()),
            config.bucket.clone(),
            config.page_size,
        )
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn list_page(&self, marker: Option<String>) -> ListingResult<ListPage> {
        let mut request = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .max_keys(self.page_size);
        if let Some(token) = marker {
            request = request.continuation_token(token);
        }

        let output = request.send().await.map_err(|e| ListingError::Request {
            bucket: self.bucket.clone(),
            message: DisplayErrorContext(&e).to_string(),
        })?;

        let objects = output
            .contents()
            .iter()
            .map(to_entry)
            .collect::<ListingResult<Vec<_>>>()?;

        let next_marker = if output.is_truncated() == Some(true) {
            output.next_continuation_token().map(ToOwned::to_owned)
        } else {
            None
        };

        debug!(
            bucket = %self.bucket,
            count = objects.len(),
            truncated = next_marker.is_some(),
            "list_objects_v2 page"
        );

        Ok(ListPage {
            objects,
            next_marker,
        })
    }
}

fn to_entry(object: &Object) -> ListingResult<ObjectEntry> {
    let key = object.key().ok_or(ListingError::MissingKey)?;
    Ok(ObjectEntry {
        key: key.to_owned(),
        size: object.size().and_then(|s| u64::try_from(s).ok()),
        last_modified: object
            .last_modified()
            .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
    })
}
