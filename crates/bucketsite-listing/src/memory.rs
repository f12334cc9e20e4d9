//! In-memory lister.

use async_trait::async_trait;
use bucketsite_core::ObjectEntry;

use crate::{ListPage, ListingResult, ObjectLister};

/// Serves a fixed set of objects in key order, paging with the last key of
/// each page as the marker.
#[derive(Debug, Clone)]
pub struct MemoryLister {
    objects: Vec<ObjectEntry>,
    page_size: usize,
}

impl MemoryLister {
    /// Create a lister over `objects` with a page size of 1000.
    pub fn new(objects: impl IntoIterator<Item = ObjectEntry>) -> Self {
        let mut objects: Vec<ObjectEntry> = objects.into_iter().collect();
        objects.sort_by(|a, b| a.key.cmp(&b.key));
        Self {
            objects,
            page_size: 1000,
        }
    }

    /// Override the page size (minimum 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

#[async_trait]
impl ObjectLister for MemoryLister {
    async fn list_page(&self, marker: Option<String>) -> ListingResult<ListPage> {
        let start = marker.map_or(0, |m| {
            self.objects.partition_point(|o| o.key.as_str() <= m.as_str())
        });
        let end = (start + self.page_size).min(self.objects.len());
        let objects = self.objects[start..end].to_vec();
        let next_marker = if end < self.objects.len() {
            objects.last().map(|o| o.key.clone())
        } else {
            None
        };
        Ok(ListPage {
            objects,
            next_marker,
        })
    }
}
