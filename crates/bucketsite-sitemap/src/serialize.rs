//! Sitemap XML writer.

use std::collections::BTreeSet;
use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::error::XmlError;

/// The sitemap protocol namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// A set of page URLs, kept sorted and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sitemap {
    locations: BTreeSet<String>,
}

impl Sitemap {
    /// Create an empty sitemap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Returns `false` if it was already present.
    pub fn insert(&mut self, loc: impl Into<String>) -> bool {
        self.locations.insert(loc.into())
    }

    /// Locations in lexicographic order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the sitemap has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        for loc in &self.locations {
            writer.create_element("url").write_inner_content(|w| {
                w.create_element("loc")
                    .write_text_content(BytesText::new(loc))?;
                Ok(())
            })?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Sitemap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Serialize a sitemap as an indented XML document with declaration.
///
/// # Errors
///
/// Returns [`XmlError`] if writing fails.
///
/// # Examples
///
/// ```
/// use bucketsite_sitemap::{Sitemap, to_xml};
///
/// let sitemap: Sitemap = ["https://example.com/index.html"].into_iter().collect();
/// let xml = to_xml(&sitemap).unwrap();
/// assert!(xml.contains("<loc>https://example.com/index.html</loc>"));
/// ```
pub fn to_xml(sitemap: &Sitemap) -> Result<String, XmlError> {
    let mut buf = Vec::with_capacity(128 + sitemap.len() * 64);
    let mut writer = Writer::new_with_indent(&mut buf, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("urlset")
        .with_attribute(("xmlns", SITEMAP_NAMESPACE))
        .write_inner_content(|w| sitemap.serialize_xml(w))?;

    tracing::debug!(entries = sitemap.len(), "serialized sitemap");
    Ok(String::from_utf8(buf)?)
}
