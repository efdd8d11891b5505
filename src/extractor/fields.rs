//! Field Lookup Rules
//!
//! Each profile field is described by an ordered list of lookups. The first
//! lookup that yields a non-blank value wins; when none does the field is
//! [`UNKNOWN`].

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::etree;
use crate::extractor::clean::clean_garbage;
use crate::result::UNKNOWN;

/// Where the value of a label-matched node is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Text after the label node's closing tag.
    Tail,
    /// Own text of the next element sibling of the label node.
    NextSibling,
}

/// One way of finding a field among the field nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// First node whose own text is exactly `label`.
    Label {
        label: &'static str,
        source: ValueSource,
    },
    /// First node whose `id` is `id`; the value is its `attribute`.
    Id {
        id: &'static str,
        attribute: &'static str,
    },
    /// First node carrying a non-empty `attribute`; the value is that
    /// attribute.
    Attribute { attribute: &'static str },
}

/// Lookups for one field, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: &'static str,
    pub lookups: &'static [Lookup],
}

// ============================================================
// FIELD TABLE
// ============================================================

const fn label(label: &'static str, source: ValueSource) -> Lookup {
    Lookup::Label { label, source }
}

pub static POSITION: FieldSpec = FieldSpec {
    field: "position",
    lookups: &[label("Position:", ValueSource::Tail)],
};

pub static SHOT_STANCE: FieldSpec = FieldSpec {
    field: "shot_stance",
    lookups: &[label("Shoots:", ValueSource::Tail)],
};

pub static HEIGHT: FieldSpec = FieldSpec {
    field: "height",
    lookups: &[label("Height:", ValueSource::Tail)],
};

pub static WEIGHT: FieldSpec = FieldSpec {
    field: "weight",
    lookups: &[label("MWeight:", ValueSource::Tail)],
};

pub static BIRTHDATE: FieldSpec = FieldSpec {
    field: "birthdate",
    lookups: &[
        Lookup::Id {
            id: "necro-birth",
            attribute: "data-birth",
        },
        Lookup::Attribute {
            attribute: "data-birth",
        },
        label("Born:", ValueSource::NextSibling),
    ],
};

pub static COLLEGE: FieldSpec = FieldSpec {
    field: "college",
    lookups: &[label("Authors:", ValueSource::NextSibling)],
};

pub static DEBUT: FieldSpec = FieldSpec {
    field: "debut",
    lookups: &[
        label("Date added:", ValueSource::NextSibling),
        label("Verified: ", ValueSource::Tail),
    ],
};

// ============================================================
// RESOLUTION
// ============================================================

/// Resolve one field against the field nodes.
///
/// Text values go through [`clean_garbage`]; attribute values are only
/// trimmed. Returns [`UNKNOWN`] when no lookup yields a value.
#[must_use]
pub fn resolve_field(nodes: &[NodeRef], spec: &FieldSpec) -> String {
    for (idx, lookup) in spec.lookups.iter().enumerate() {
        if let Some(value) = apply_lookup(nodes, lookup) {
            debug!("{}: resolved by lookup {} ({:?})", spec.field, idx + 1, lookup);
            return value;
        }
    }
    debug!("{}: no lookup matched", spec.field);
    UNKNOWN.to_string()
}

/// Resolve the profile name from the first name node.
#[must_use]
pub fn resolve_name(name_nodes: &[NodeRef]) -> String {
    name_nodes
        .first()
        .and_then(etree::text)
        .and_then(|t| clean_garbage(&t))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn apply_lookup(nodes: &[NodeRef], lookup: &Lookup) -> Option<String> {
    match *lookup {
        Lookup::Label { label, source } => {
            let node = find_by_text(nodes, label)?;
            let raw = match source {
                ValueSource::Tail => etree::tail(node),
                ValueSource::NextSibling => {
                    dom::next_element_sibling(node).and_then(|next| etree::text(&next))
                }
            }?;
            clean_garbage(&raw)
        }
        Lookup::Id { id, attribute } => {
            let node = find_by_id(nodes, id)?;
            attribute_value(node, attribute)
        }
        Lookup::Attribute { attribute } => {
            let node = find_by_attribute(nodes, attribute)?;
            attribute_value(node, attribute)
        }
    }
}

/// First node whose own text equals `label` exactly.
#[must_use]
pub(crate) fn find_by_text<'n, 'a>(
    nodes: &'n [NodeRef<'a>],
    label: &str,
) -> Option<&'n NodeRef<'a>> {
    nodes
        .iter()
        .find(|n| etree::text(n).is_some_and(|t| t == label))
}

/// First node whose `id` attribute equals `id`.
#[must_use]
pub(crate) fn find_by_id<'n, 'a>(nodes: &'n [NodeRef<'a>], id: &str) -> Option<&'n NodeRef<'a>> {
    nodes.iter().find(|n| dom::id(n).is_some_and(|v| v == id))
}

/// First node carrying a non-empty `attribute`.
#[must_use]
pub(crate) fn find_by_attribute<'n, 'a>(
    nodes: &'n [NodeRef<'a>],
    attribute: &str,
) -> Option<&'n NodeRef<'a>> {
    nodes
        .iter()
        .find(|n| dom::has_nonempty_attribute(n, attribute))
}

fn attribute_value(node: &NodeRef, attribute: &str) -> Option<String> {
    let value = dom::get_attribute(node, attribute)?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
