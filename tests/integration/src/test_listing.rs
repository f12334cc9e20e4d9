//! Bucket listing integration tests.

#[cfg(test)]
mod tests {
    use bucketsite_core::SiteConfig;
    use bucketsite_listing::{ListingError, S3Lister, list_all};

    use crate::{cleanup_bucket, create_populated_bucket, endpoint_url, s3_client};

    const KEYS: [&str; 7] = [
        "photos/2024/jan/img1.jpg",
        "photos/2024/jan/img2.jpg",
        "photos/2024/feb/img3.jpg",
        "photos/2025/mar/img4.jpg",
        "documents/report.pdf",
        "documents/readme.txt",
        "root.txt",
    ];

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_follow_continuation_tokens() {
        let client = s3_client();
        let bucket = create_populated_bucket(&client, "pages", &KEYS).await;

        let lister = S3Lister::new(client.clone(), bucket.clone(), 2);
        let objects = list_all(&lister).await.expect("listing succeeds");

        let mut listed: Vec<&str> = objects.iter().map(|o| o.key.as_str()).collect();
        let mut expected = KEYS.to_vec();
        listed.sort_unstable();
        expected.sort_unstable();
        assert_eq!(listed, expected);
        assert!(objects.iter().all(|o| o.size == Some(1)));
        assert!(objects.iter().all(|o| o.last_modified.is_some()));

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_build_client_from_config() {
        let client = s3_client();
        let bucket = create_populated_bucket(&client, "config", &KEYS[..2]).await;

        let config = SiteConfig::builder()
            .bucket(bucket.clone())
            .access_key_id(Some("test".into()))
            .secret_access_key(Some("test".into()))
            .endpoint(Some(endpoint_url()))
            .force_path_style(true)
            .build();
        let lister = S3Lister::from_config(&config).await;
        let objects = list_all(&lister).await.expect("listing succeeds");
        assert_eq!(objects.len(), 2);

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_fail_for_missing_bucket() {
        let client = s3_client();
        let lister = S3Lister::new(client, crate::test_bucket_name("missing"), 1000);

        let err = list_all(&lister).await.expect_err("bucket does not exist");
        assert!(matches!(err, ListingError::Request { .. }));
    }
}
