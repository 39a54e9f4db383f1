//! Ancestor scope-prefix resolution with per-node memoization
//!
//! A node inherits a dot-joined scope prefix from its ancestors, optionally
//! extended by a prefix attribute declared on the node itself. The combined
//! prefix is memoized in a side table keyed by node identity, so repeated
//! resolutions never re-walk the ancestor chain and the node's attribute
//! surface is never written.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{DirectiveNode, NodeId, NodeKind};

/// Sentinel marking a rooted prefix: nothing is inherited above it.
pub const ROOT_PREFIX: &str = "$root";

/// Leading dot (with leading whitespace) or trailing dot (with trailing whitespace)
static EDGE_DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^\s*\.)|(\.\s*$)").unwrap());

/// Strip the first root sentinel and stray edge dot-whitespace from a path
pub(crate) fn strip_root(path: &str) -> String {
    EDGE_DOTS
        .replace_all(&path.replacen(ROOT_PREFIX, "", 1), "")
        .into_owned()
}

/// Computes and memoizes per-node scope prefixes
pub struct PrefixResolver {
    /// Attribute carrying an author-declared prefix on element nodes
    attribute: String,
    /// Memo table: node identity → combined prefix
    cache: DashMap<NodeId, String>,
}

impl PrefixResolver {
    /// Resolver reading declared prefixes from `attribute`
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            cache: DashMap::new(),
        }
    }

    /// Combined prefix for a node, sentinel included.
    ///
    /// A declared prefix containing the sentinel is rooted and wins as-is; a
    /// relative declared prefix extends the parent's prefix; a node with no
    /// declaration inherits the parent's prefix unchanged.
    pub fn prefix(&self, node: &dyn DirectiveNode) -> String {
        if let Some(cached) = self.cache.get(&node.id()) {
            return cached.clone();
        }

        let Some(parent) = node.parent() else {
            // Walked past the tree root without finding a declaration
            return ROOT_PREFIX.to_string();
        };

        let declared = match node.kind() {
            NodeKind::Element => node.attribute(&self.attribute),
            NodeKind::Comment => None,
        };

        let combined = match declared {
            Some(prefix) if prefix.contains(ROOT_PREFIX) => prefix,
            Some(prefix) => format!("{}.{}", self.prefix(parent), prefix),
            None => self.prefix(parent),
        };

        self.cache.insert(node.id(), combined.clone());
        combined
    }

    /// Prefix with the sentinel and edge dot-whitespace removed, as used to
    /// qualify relative directive tokens
    pub fn clean_prefix(&self, node: &dyn DirectiveNode) -> String {
        strip_root(&self.prefix(node))
    }

    /// Drop every memoized prefix.
    ///
    /// There is no per-node invalidation: callers that re-parent nodes or
    /// change declared prefixes must clear the whole table before resolving
    /// again.
    pub fn clear(&self) {
        self.cache.clear();
    }
}
