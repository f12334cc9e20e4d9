//! Tree nodes and folder/file classification.
//!
//! Storage has no directory marker, so a key is treated as a folder exactly
//! when some other listed key starts with it. The test runs on the raw key
//! strings: given `a` and `ab`, `a` is a folder even though `ab` is not
//! below it. Downstream URL and tree logic relies on this contract.

use chrono::{DateTime, Utc};

use crate::key::{join_key, parse_key};

/// One object as returned by the storage listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Raw object key.
    pub key: String,
    /// Object size in bytes.
    pub size: Option<u64>,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectEntry {
    /// Create an entry with no metadata.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
            last_modified: None,
        }
    }
}

/// Folder or file. A node is always exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A folder, real or synthesized.
    Folder,
    /// A file. `hidden` is set when the file name starts with `.`.
    File {
        /// Whether the file name starts with `.`.
        hidden: bool,
    },
}

/// Where a node came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOrigin {
    /// The implicit bucket root.
    Root,
    /// An object present in the listing.
    Listed,
    /// A folder inferred from a key prefix.
    Synthesized,
}

/// Classification fields derived from a key and the full key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Non-empty path segments.
    pub key_parts: Vec<String>,
    /// Folder or file.
    pub kind: NodeKind,
    /// Segments minus the last one, joined. Empty for top-level nodes.
    pub parent_key: String,
    /// Last segment, or empty for the root.
    pub file_name: String,
}

impl Classification {
    /// Depth in the tree (number of segments).
    #[must_use]
    pub fn levels_deep(&self) -> usize {
        self.key_parts.len()
    }

    /// Classification for a node that is a folder by construction.
    #[must_use]
    pub fn folder(key_parts: Vec<String>) -> Self {
        let (parent_key, file_name) = split_parent(&key_parts);
        Self {
            key_parts,
            kind: NodeKind::Folder,
            parent_key,
            file_name,
        }
    }
}

/// A folder or file in the reconstructed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Normalized slash-joined key; `""` for the root.
    pub key: String,
    /// Non-empty path segments.
    pub key_parts: Vec<String>,
    /// Folder or file.
    pub kind: NodeKind,
    /// Normalized key of the parent folder; `""` for top-level nodes.
    pub parent_key: String,
    /// Last segment, or `""` for the root.
    pub file_name: String,
    /// Root-relative path for folders, absolute URL for files.
    pub url: String,
    /// Object size, for listed objects.
    pub size: Option<u64>,
    /// Last modification time, for listed objects.
    pub last_modified: Option<DateTime<Utc>>,
    /// Whether the node is the root, listed, or synthesized.
    pub origin: NodeOrigin,
}

impl Node {
    /// Depth in the tree; the root is 0.
    #[must_use]
    pub fn levels_deep(&self) -> usize {
        self.key_parts.len()
    }

    /// Whether this node is a folder.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    /// Whether this node is a file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Whether this node is a file whose name starts with `.`.
    #[must_use]
    pub fn is_hidden_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { hidden: true })
    }

    /// Whether this node is the bucket root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key_parts.is_empty()
    }
}

/// Sorted set of raw listed keys supporting the literal-prefix folder test.
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    keys: Vec<String>,
}

impl KeyIndex {
    /// Build an index over raw keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        keys.sort_unstable();
        keys.dedup();
        Self { keys }
    }

    /// Whether another key in the index starts with `key`.
    ///
    /// Keys sharing a prefix are contiguous in sorted order, and `key` itself
    /// sorts first among them.
    #[must_use]
    pub fn has_extension_of(&self, key: &str) -> bool {
        let start = self.keys.partition_point(|k| k.as_str() < key);
        self.keys[start..]
            .iter()
            .take_while(|k| k.starts_with(key))
            .any(|k| k != key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Classify a listed key against the full key set.
///
/// # Examples
///
/// ```
/// use bucketsite_core::{KeyIndex, NodeKind, classify};
///
/// let index = KeyIndex::new(["docs/readme.md", "docs/.env"]);
/// let c = classify("docs/.env", &index);
/// assert_eq!(c.kind, NodeKind::File { hidden: true });
/// assert_eq!(c.parent_key, "docs");
/// ```
#[must_use]
pub fn classify(key: &str, index: &KeyIndex) -> Classification {
    let key_parts = parse_key(key);
    let (parent_key, file_name) = split_parent(&key_parts);
    let kind = if index.has_extension_of(key) {
        NodeKind::Folder
    } else {
        NodeKind::File {
            hidden: file_name.starts_with('.'),
        }
    };
    Classification {
        key_parts,
        kind,
        parent_key,
        file_name,
    }
}

fn split_parent(parts: &[String]) -> (String, String) {
    match parts.split_last() {
        Some((last, parents)) => (join_key(parents), last.clone()),
        None => (String::new(), String::new()),
    }
}
