//! Field resolution and normalization.
//!
//! # Module Structure
//!
//! - `fields`: Lookup table per field and the resolver walking it
//! - `clean`: Raw text cleanup (`clean_garbage`)
//! - `normalize`: Height, weight and birth date conversion to integers
//!
//! # Usage
//!
//! ```rust
//! use protein_scrape::{dom, extractor, selector};
//!
//! let doc = dom::parse(r#"<div id="info_box">
//!     <p><span>Ubiquitin</span></p>
//!     <p><span>Height:</span> 6' 2" <span>MWeight:</span> 8565 Da</p>
//! </div>"#);
//! let located = selector::locate(&doc).expect("layout 1 matches");
//!
//! let record = extractor::resolve_profile(&located);
//! assert_eq!(record.name, "Ubiquitin");
//! assert_eq!(record.int_height, 74);
//! assert_eq!(record.int_weight, 8565);
//! ```

pub mod clean;
pub mod fields;
pub mod normalize;

pub use clean::clean_garbage;
pub use fields::{resolve_field, resolve_name, FieldSpec, Lookup, ValueSource};
pub use normalize::BirthDate;

use crate::result::ProfileRecord;
use crate::selector::Located;

/// Build the full record from located nodes.
///
/// Never fails: fields that cannot be found are `"Unknown"` and their
/// derived integers are 0.
#[must_use]
pub fn resolve_profile(located: &Located<'_>) -> ProfileRecord {
    let nodes = located.field_nodes.as_slice();

    let height = resolve_field(nodes, &fields::HEIGHT);
    let weight = resolve_field(nodes, &fields::WEIGHT);
    let birthdate = resolve_field(nodes, &fields::BIRTHDATE);

    let int_height = normalize::height_inches(&height);
    let int_weight = normalize::weight(&weight);
    let born = normalize::birth_date(&birthdate);

    ProfileRecord {
        name: resolve_name(&located.name_nodes),
        position: resolve_field(nodes, &fields::POSITION),
        shot_stance: resolve_field(nodes, &fields::SHOT_STANCE),
        height,
        weight,
        birthdate,
        college: resolve_field(nodes, &fields::COLLEGE),
        debut: resolve_field(nodes, &fields::DEBUT),
        int_height,
        int_weight,
        int_birth_year: born.year,
        int_birth_month: born.month,
        int_birth_day: born.day,
    }
}
