//! XML sitemap serialization for bucketsite.
//!
//! Produces a [sitemaps.org](https://www.sitemaps.org/protocol.html) document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url><loc>https://example.com/index.html</loc></url>
//! </urlset>
//! ```
//!
//! Entries are deduplicated and sorted before writing so the output does not
//! depend on listing or task completion order.

pub mod error;
pub mod serialize;

pub use error::XmlError;
pub use serialize::{SITEMAP_NAMESPACE, Sitemap, to_xml};
