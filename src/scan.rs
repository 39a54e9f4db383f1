//! Directive marker scanning
//!
//! Finds the raw directive text a node carries: the configured attribute's
//! value on elements, or everything after the virtual marker substring inside
//! a comment's text.

use crate::node::{DirectiveNode, NodeKind};

/// Raw directive text carried by a node, if any.
///
/// Element presence is attribute existence — an empty attribute value is
/// still a marker. Comment text runs from just past the marker substring to
/// the end of the comment.
pub(crate) fn marker_text(
    node: &dyn DirectiveNode,
    attribute: &str,
    virtual_attribute: &str,
) -> Option<String> {
    match node.kind() {
        NodeKind::Element => node.attribute(attribute),
        NodeKind::Comment => {
            let text = node.text()?;
            let index = text.find(virtual_attribute)?;
            Some(text[index + virtual_attribute.len()..].to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::MemoryNode;

    #[test]
    fn element_attribute_value() {
        let node = MemoryNode::element().with_attribute("data-class", "one two");

        assert_eq!(
            marker_text(&node, "data-class", "ko class:").as_deref(),
            Some("one two")
        );
    }

    #[test]
    fn element_without_marker() {
        let node = MemoryNode::element().with_attribute("data-bind", "text: one");

        assert!(marker_text(&node, "data-class", "ko class:").is_none());
    }

    #[test]
    fn empty_attribute_counts_as_present() {
        let node = MemoryNode::element().with_attribute("data-class", "");

        assert_eq!(marker_text(&node, "data-class", "ko class:").as_deref(), Some(""));
    }

    #[test]
    fn comment_marker_text_runs_to_end() {
        let node = MemoryNode::comment("ko class: one two");

        assert_eq!(
            marker_text(&node, "data-class", "ko class:").as_deref(),
            Some(" one two")
        );
    }

    #[test]
    fn comment_without_marker() {
        let node = MemoryNode::comment("ko with: one");

        assert!(marker_text(&node, "data-class", "ko class:").is_none());
    }

    #[test]
    fn custom_virtual_marker() {
        let node = MemoryNode::comment("ko test: one");

        assert_eq!(
            marker_text(&node, "data-class", "ko test:").as_deref(),
            Some(" one")
        );
    }
}
