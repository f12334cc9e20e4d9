//! Object storage listing for bucketsite.
//!
//! A bucket is listed one page at a time through the [`ObjectLister`] trait.
//! [`list_all`] walks the continuation-token chain in order and returns the
//! complete set of objects; tree reconstruction never sees a partial listing.
//!
//! Two listers are provided:
//!
//! - [`S3Lister`] talks to S3 or any S3-compatible endpoint via `aws-sdk-s3`.
//! - [`MemoryLister`] serves a fixed key set, for tests and dry runs.

pub mod error;
pub mod memory;
pub mod s3;

use async_trait::async_trait;
use bucketsite_core::ObjectEntry;
use tracing::debug;

pub use error::{ListingError, ListingResult};
pub use memory::MemoryLister;
pub use s3::S3Lister;

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Objects on this page.
    pub objects: Vec<ObjectEntry>,
    /// Token for the next page; `None` on the last page.
    pub next_marker: Option<String>,
}

/// Source of paginated object listings.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// Fetch the page following `marker` (`None` for the first page).
    async fn list_page(&self, marker: Option<String>) -> ListingResult<ListPage>;
}

/// List every object by following the marker chain until it ends.
///
/// # Errors
///
/// Returns the first error reported by the lister, or
/// [`ListingError::RepeatedMarker`] if the lister hands back a marker it
/// already returned.
pub async fn list_all(lister: &dyn ObjectLister) -> ListingResult<Vec<ObjectEntry>> {
    let mut objects = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = lister.list_page(marker.clone()).await?;
        pages += 1;
        objects.extend(page.objects);

        match page.next_marker {
            Some(next) if marker.as_deref() == Some(next.as_str()) => {
                return Err(ListingError::RepeatedMarker(next));
            }
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    debug!(pages, objects = objects.len(), "listing complete");
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StuckLister;

    #[async_trait]
    impl ObjectLister for StuckLister {
        async fn list_page(&self, _marker: Option<String>) -> ListingResult<ListPage> {
            Ok(ListPage {
                objects: vec![ObjectEntry::new("k")],
                next_marker: Some("same".to_owned()),
            })
        }
    }

    #[tokio::test]
    async fn test_should_collect_all_pages() {
        let keys: Vec<String> = (0..7).map(|i| format!("dir/file-{i}.txt")).collect();
        let lister = MemoryLister::new(keys.iter().map(ObjectEntry::new)).with_page_size(3);

        let objects = list_all(&lister).await.expect("listing succeeds");
        let listed: Vec<&str> = objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(listed, keys);
    }

    #[tokio::test]
    async fn test_should_return_nothing_for_empty_bucket() {
        let lister = MemoryLister::new(Vec::<ObjectEntry>::new());
        let objects = list_all(&lister).await.expect("listing succeeds");
        assert!(objects.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_repeated_marker() {
        let err = list_all(&StuckLister).await.expect_err("must not loop");
        assert!(matches!(err, ListingError::RepeatedMarker(m) if m == "same"));
    }

    #[test]
    fn test_should_block_on_listing() {
        let lister = MemoryLister::new([ObjectEntry::new("a")]);
        let objects = tokio_test::block_on(list_all(&lister)).expect("listing succeeds");
        assert_eq!(objects.len(), 1);
    }
}
