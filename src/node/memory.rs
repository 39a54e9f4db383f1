//! In-memory node implementation
//!
//! For hosts without a real tree, and for tests. Nodes are built once,
//! wrapped in `Rc` to form parent links, and stay immutable afterwards.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;

use super::{DirectiveNode, NodeId, NodeKind};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Simple owned node with an optional parent link
pub struct MemoryNode {
    id: NodeId,
    kind: NodeKind,
    text: Option<String>,
    attributes: FxHashMap<String, String>,
    parent: Option<Rc<MemoryNode>>,
}

impl MemoryNode {
    /// New element node with no attributes and no parent
    pub fn element() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind: NodeKind::Element,
            text: None,
            attributes: FxHashMap::default(),
            parent: None,
        }
    }

    /// New comment node with the given body text
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            kind: NodeKind::Comment,
            text: Some(text.into()),
            attributes: FxHashMap::default(),
            parent: None,
        }
    }

    /// Builder: add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: link to a parent node
    pub fn with_parent(mut self, parent: &Rc<MemoryNode>) -> Self {
        self.parent = Some(Rc::clone(parent));
        self
    }

    /// Set an attribute on a node still under construction
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }
}

impl DirectiveNode for MemoryNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn parent(&self) -> Option<&dyn DirectiveNode> {
        self.parent.as_deref().map(|node| node as &dyn DirectiveNode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = MemoryNode::element();
        let b = MemoryNode::element();
        let c = MemoryNode::comment("ko class: one");

        assert_ne!(a.id(), b.id());
        assert_ne!(b.id(), c.id());
    }

    #[test]
    fn element_attributes() {
        let node = MemoryNode::element().with_attribute("data-class", "one two");

        assert_eq!(node.kind(), NodeKind::Element);
        assert_eq!(node.attribute("data-class").as_deref(), Some("one two"));
        assert_eq!(node.attribute("data-bind"), None);
        assert_eq!(node.text(), None);
    }

    #[test]
    fn empty_attribute_is_present() {
        let node = MemoryNode::element().with_attribute("data-class", "");
        assert_eq!(node.attribute("data-class").as_deref(), Some(""));
    }

    #[test]
    fn comment_text() {
        let node = MemoryNode::comment("ko class: one");

        assert_eq!(node.kind(), NodeKind::Comment);
        assert_eq!(node.text().as_deref(), Some("ko class: one"));
        assert_eq!(node.attribute("data-class"), None);
    }

    #[test]
    fn parent_chain() {
        let root = Rc::new(MemoryNode::element());
        let mid = Rc::new(MemoryNode::element().with_parent(&root));
        let leaf = MemoryNode::element().with_parent(&mid);

        assert!(root.parent().is_none());
        assert_eq!(leaf.parent().unwrap().id(), mid.id());
        assert_eq!(leaf.parent().unwrap().parent().unwrap().id(), root.id());
    }
}
