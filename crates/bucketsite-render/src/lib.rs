//! Static site emission for bucketsite.
//!
//! Given a [`SiteTree`](bucketsite_core::SiteTree), writes one
//! `index.html` per folder under the output directory, mirroring the key
//! hierarchy, plus the static assets the pages link to and an optional
//! `sitemap.xml`.
//!
//! ```text
//! <output>/
//!   index.html          root listing
//!   docs/index.html     listing of docs/
//!   assets/style.css    built-in stylesheet (+ copied assets)
//!   sitemap.xml         when enabled
//! ```

pub mod assets;
pub mod emit;
pub mod error;
pub mod page;

pub use assets::install_assets;
pub use emit::{EmitReport, INDEX_FILE, SITEMAP_FILE, emit_site};
pub use error::{EmitError, EmitResult};
pub use page::ListingPage;
