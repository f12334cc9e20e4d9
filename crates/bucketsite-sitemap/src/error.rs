//! Sitemap serialization errors.

use std::io;

/// Errors that can occur while writing sitemap XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The writer produced bytes that are not UTF-8.
    #[error("sitemap is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
