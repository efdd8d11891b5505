//! Element Tree (etree) Utilities
//!
//! Text/tail accessors over `dom_query` nodes.
//!
//! ## Text vs Tail
//!
//! - **Text**: text content BEFORE the element's first child node that is
//!   not text
//! - **Tail**: text content AFTER the element's closing tag, up to the next
//!   non-text sibling
//!
//! ```html
//! <p>
//!   <span>Height:</span> 6' 1"    <!-- "Height:" is text, " 6' 1\"" is tail -->
//!   <span>Born:</span><a>1990</a>
//! </p>
//! ```
//!
//! Both return `None` when there is no such text node at all, which is
//! distinct from an empty or blank string.

use dom_query::NodeRef;

/// Own leading text of an element.
#[must_use]
pub fn text(node: &NodeRef) -> Option<String> {
    collect_text_run(node.first_child())
}

/// Text following an element's closing tag.
#[must_use]
pub fn tail(node: &NodeRef) -> Option<String> {
    collect_text_run(node.next_sibling())
}

/// Concatenate consecutive text nodes starting at `start`.
fn collect_text_run(start: Option<NodeRef>) -> Option<String> {
    let mut out: Option<String> = None;
    let mut current = start;
    while let Some(node) = current {
        if !node.is_text() {
            break;
        }
        out.get_or_insert_with(String::new).push_str(&node.text());
        current = node.next_sibling();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn spans(doc: &dom::Document) -> Vec<NodeRef<'_>> {
        dom::select_nodes(doc, "span")
    }

    #[test]
    fn text_stops_at_first_child_element() {
        let doc = dom::parse("<p><span>Position:<b>ignored</b> after</span></p>");
        assert_eq!(text(&spans(&doc)[0]).as_deref(), Some("Position:"));
    }

    #[test]
    fn text_is_none_when_element_starts_with_child() {
        let doc = dom::parse("<p><span><b>x</b>late</span></p>");
        assert_eq!(text(&spans(&doc)[0]), None);
    }

    #[test]
    fn tail_runs_until_next_element() {
        let doc = dom::parse("<p><span>Shoots:</span> L <span>Height:</span></p>");
        let nodes = spans(&doc);
        assert_eq!(tail(&nodes[0]).as_deref(), Some(" L "));
        assert_eq!(tail(&nodes[1]), None);
    }

    #[test]
    fn tail_of_adjacent_elements_is_none() {
        let doc = dom::parse("<p><span>Born:</span><a>1990</a></p>");
        assert_eq!(tail(&spans(&doc)[0]), None);
    }
}
