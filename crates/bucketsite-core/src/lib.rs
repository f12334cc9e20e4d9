//! Key-to-tree reconstruction for bucketsite.
//!
//! Object storage has no directories: a bucket is a flat set of keys that
//! happen to contain `/`. This crate turns such a listing into a tree of
//! folder and file nodes that the renderer can walk, one page per folder.
//!
//! # Pipeline
//!
//! ```text
//! [ObjectEntry] --key--> parse_key --> classify (KeyIndex)
//!                                         |
//!                                         v
//!                                   UrlResolver (SiteConfig)
//!                                         |
//!                                         v
//!                  SiteTree::build (synthesize -> dedup -> link)
//! ```
//!
//! Nothing here performs I/O; listing and emission live in sibling crates.

pub mod config;
pub mod error;
pub mod key;
pub mod node;
pub mod tree;
pub mod url;

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use key::{join_key, normalize_key, parse_key};
pub use node::{Classification, KeyIndex, Node, NodeKind, NodeOrigin, ObjectEntry, classify};
pub use tree::SiteTree;
pub use url::UrlResolver;
