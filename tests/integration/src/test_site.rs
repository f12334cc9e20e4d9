//! End-to-end site generation tests.

#[cfg(test)]
mod tests {
    use std::fs;

    use bucketsite_core::{SiteConfig, SiteTree};
    use bucketsite_listing::{S3Lister, list_all};
    use bucketsite_render::emit_site;

    use crate::{cleanup_bucket, create_populated_bucket, endpoint_url, s3_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_generate_site_for_bucket() {
        let client = s3_client();
        let keys = [
            "docs/readme.md",
            "docs/guide/intro.md",
            "logo.png",
            ".hidden",
        ];
        let bucket = create_populated_bucket(&client, "site", &keys).await;
        let out = tempfile::tempdir().expect("tempdir");

        let config = SiteConfig::builder()
            .bucket(bucket.clone())
            .endpoint(Some(endpoint_url()))
            .force_path_style(true)
            .output(out.path().to_path_buf())
            .include_sitemap(true)
            .domain(Some("https://files.example.com".into()))
            .build();

        let lister = S3Lister::new(client.clone(), bucket.clone(), 2);
        let objects = list_all(&lister).await.expect("listing succeeds");
        let tree = SiteTree::build(&objects, &config);
        let report = emit_site(&tree, &config).await.expect("emit succeeds");

        assert_eq!(report.pages.len(), 3);
        assert!(out.path().join("docs/guide/index.html").is_file());

        let root = fs::read_to_string(out.path().join("index.html")).expect("root page");
        assert!(root.contains(&format!("{}/{bucket}/logo.png", endpoint_url())));
        assert!(!root.contains(".hidden"));

        let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).expect("sitemap");
        assert_eq!(sitemap.matches("<loc>").count(), 3);

        cleanup_bucket(&client, &bucket).await;
    }
}
