//! Layout Locator
//!
//! Finds the name nodes and the field nodes of a profile page by trying the
//! known layouts in priority order. The field path is never searched on its
//! own: it is the one paired with the first layout whose name path matched.

use dom_query::{Document, NodeRef};
use tracing::debug;

use crate::dom;

pub mod layouts;

pub use layouts::{Layout, LAYOUTS};

/// Nodes selected by the first matching layout.
#[derive(Clone)]
pub struct Located<'a> {
    /// 1-based position of the matching layout in [`LAYOUTS`].
    pub variant: usize,

    /// Name nodes, never empty.
    pub name_nodes: Vec<NodeRef<'a>>,

    /// Field nodes from the paired path. May be empty: every field then
    /// resolves to `"Unknown"`.
    pub field_nodes: Vec<NodeRef<'a>>,
}

/// Locate the profile nodes using the built-in layout table.
///
/// Returns `None` when no layout matches.
///
/// # Example
///
/// ```rust
/// use protein_scrape::{dom, selector};
///
/// let doc = dom::parse(r#"<div id="info_box">
///     <p><span>Ubiquitin</span></p>
///     <p><span>Position:</span> Cytoplasm</p>
/// </div>"#);
///
/// let located = selector::locate(&doc).expect("layout 1 matches");
/// assert_eq!(located.variant, 1);
/// assert_eq!(located.field_nodes.len(), 1);
/// ```
#[must_use]
pub fn locate(doc: &Document) -> Option<Located<'_>> {
    locate_with(doc, LAYOUTS)
}

/// Locate the profile nodes using a caller-supplied layout table.
#[must_use]
pub fn locate_with<'a>(doc: &'a Document, layouts: &[Layout]) -> Option<Located<'a>> {
    for (idx, layout) in layouts.iter().enumerate() {
        let name_nodes = dom::select_nodes(doc, layout.name_path);
        if name_nodes.is_empty() {
            continue;
        }

        let field_nodes = dom::select_nodes(doc, layout.field_path);
        debug!(
            "layout {} matched: {} name node(s), {} field node(s)",
            idx + 1,
            name_nodes.len(),
            field_nodes.len()
        );
        return Some(Located {
            variant: idx + 1,
            name_nodes,
            field_nodes,
        });
    }
    None
}
