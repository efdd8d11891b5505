//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The rest of the crate goes
//! through these functions instead of calling `dom_query` directly, so the
//! node-level operations the resolver needs live in one place.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

/// Parse HTML string into document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Select all nodes matching a CSS selector, in document order.
#[must_use]
pub fn select_nodes<'a>(doc: &'a Document, css: &str) -> Vec<NodeRef<'a>> {
    doc.select(css).nodes().to_vec()
}

// === Attribute Operations ===

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<String> {
    get_attribute(node, "id")
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Check that an attribute exists and is not empty.
#[must_use]
pub fn has_nonempty_attribute(node: &NodeRef, name: &str) -> bool {
    node.attr(name).is_some_and(|v| !v.is_empty())
}

// === Tree Navigation ===

/// Get next element sibling, skipping text and comment nodes.
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}
