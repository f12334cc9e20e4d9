//! Tree synthesis: flat listing in, linked folder/file tree out.
//!
//! Built in three passes over an in-memory node list:
//!
//! 1. every listed key of depth `N` contributes folder nodes for its
//!    prefixes of depth `1..N`;
//! 2. root, synthesized folders and listed nodes are concatenated (in that
//!    order) and deduplicated by normalized key, first occurrence wins;
//! 3. each folder is linked to the nodes whose parent key equals its key.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::SiteConfig;
use crate::key::normalize_key;
use crate::node::{Classification, KeyIndex, Node, NodeKind, NodeOrigin, ObjectEntry, classify};
use crate::url::UrlResolver;

/// Deduplicated tree of nodes. Index 0 is always the root.
#[derive(Debug, Clone)]
pub struct SiteTree {
    nodes: Vec<Node>,
    children: Vec<Vec<usize>>,
}

impl SiteTree {
    /// Build the tree for a complete listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketsite_core::{ObjectEntry, SiteConfig, SiteTree};
    ///
    /// let config = SiteConfig::builder().bucket("b".into()).build();
    /// let tree = SiteTree::build(&[ObjectEntry::new("docs/readme.md")], &config);
    ///
    /// let top: Vec<&str> = tree.children(tree.root()).map(|n| n.key.as_str()).collect();
    /// assert_eq!(top, vec!["docs"]);
    /// ```
    #[must_use]
    pub fn build(objects: &[ObjectEntry], config: &SiteConfig) -> Self {
        let resolver = UrlResolver::new(config);
        let index = KeyIndex::new(objects.iter().map(|o| o.key.clone()));

        let listed: Vec<Node> = objects
            .iter()
            .map(|object| listed_node(object, &index, &resolver))
            .collect();
        let synthesized = synthesize_ancestors(&listed, &resolver);

        let candidates = std::iter::once(root_node(&resolver))
            .chain(synthesized)
            .chain(listed);
        let nodes = dedup_by_key(candidates);
        let children = link_children(&nodes);

        debug!(
            objects = objects.len(),
            nodes = nodes.len(),
            folders = nodes.iter().filter(|n| n.is_folder()).count(),
            "built site tree"
        );

        Self { nodes, children }
    }

    /// The bucket root.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// All nodes, root first.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Look up a node by key; slashes around the key are ignored.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        let key = normalize_key(key);
        self.nodes.iter().find(|n| n.key == key)
    }

    /// Folder nodes, root first.
    pub fn folders(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_folder())
    }

    /// Direct children of `node`, in listing order. Files have none.
    pub fn children<'a>(&'a self, node: &Node) -> impl Iterator<Item = &'a Node> + use<'a> {
        let slot = self
            .nodes
            .iter()
            .position(|n| n.key == node.key)
            .map_or(&[][..], |i| self.children[i].as_slice());
        slot.iter().map(move |&i| &self.nodes[i])
    }

    /// Direct children of every folder, paired with the folder.
    pub fn folder_listings(&self) -> impl Iterator<Item = (&Node, Vec<&Node>)> {
        self.nodes
            .iter()
            .zip(&self.children)
            .filter(|(n, _)| n.is_folder())
            .map(move |(n, kids)| (n, kids.iter().map(|&i| &self.nodes[i]).collect()))
    }
}

fn root_node(resolver: &UrlResolver<'_>) -> Node {
    Node {
        key: String::new(),
        key_parts: Vec::new(),
        kind: NodeKind::Folder,
        parent_key: String::new(),
        file_name: String::new(),
        url: resolver.folder_url(&[]),
        size: None,
        last_modified: None,
        origin: NodeOrigin::Root,
    }
}

fn listed_node(object: &ObjectEntry, index: &KeyIndex, resolver: &UrlResolver<'_>) -> Node {
    let classification = classify(&object.key, index);
    let mut node = into_node(classification, resolver, NodeOrigin::Listed);
    node.size = object.size;
    node.last_modified = object.last_modified;
    node
}

fn into_node(c: Classification, resolver: &UrlResolver<'_>, origin: NodeOrigin) -> Node {
    let url = resolver.resolve(c.kind, &c.key_parts);
    Node {
        key: crate::key::join_key(&c.key_parts),
        key_parts: c.key_parts,
        kind: c.kind,
        parent_key: c.parent_key,
        file_name: c.file_name,
        url,
        size: None,
        last_modified: None,
        origin,
    }
}

fn synthesize_ancestors(listed: &[Node], resolver: &UrlResolver<'_>) -> Vec<Node> {
    let mut seen = HashSet::new();
    let mut folders = Vec::new();
    for node in listed {
        for depth in 1..node.levels_deep() {
            let parts = &node.key_parts[..depth];
            if seen.insert(parts.to_vec()) {
                let c = Classification::folder(parts.to_vec());
                folders.push(into_node(c, resolver, NodeOrigin::Synthesized));
            }
        }
    }
    folders
}

fn dedup_by_key(candidates: impl Iterator<Item = Node>) -> Vec<Node> {
    let mut seen = HashSet::new();
    candidates
        .filter(|node| seen.insert(normalize_key(&node.key).to_owned()))
        .collect()
}

fn link_children(nodes: &[Node]) -> Vec<Vec<usize>> {
    let folder_slots: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_folder())
        .map(|(i, n)| (normalize_key(&n.key), i))
        .collect();

    let mut children = vec![Vec::new(); nodes.len()];
    for (i, node) in nodes.iter().enumerate() {
        if node.is_root() {
            continue;
        }
        // Depth-1 nodes have an empty parent key, which is the root's key.
        let parent = if node.levels_deep() == 1 {
            Some(0)
        } else {
            folder_slots.get(normalize_key(&node.parent_key)).copied()
        };
        if let Some(p) = parent {
            children[p].push(i);
        }
    }
    children
}
