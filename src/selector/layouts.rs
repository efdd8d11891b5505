//! Known Page Layouts
//!
//! Each entry pairs the path to the name nodes with the path to the field
//! nodes of one historical revision of the profile page template. The
//! original paths were XPath expressions of the form
//! `//*[@id="info_box"]/div[3]/p[2]/span`; `p[n]` selects the n-th `p`
//! child, which is `p:nth-of-type(n)` in CSS.

/// One known structural variant of the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Selector for the name nodes; the first match holds the profile name.
    pub name_path: &'static str,

    /// Selector for the field nodes, used only when `name_path` matched.
    pub field_path: &'static str,
}

// ============================================================
// LAYOUT TABLE
// ============================================================

/// Layouts in priority order. The first whose `name_path` matches wins.
///
/// The third entry has the same `name_path` as the first, so a document
/// can never select it. It stays in the table to keep the numbering of the
/// historical layouts stable.
pub static LAYOUTS: &[Layout] = &[
    // 1: //*[@id="info_box"]/p[1]/span -> p[2]/span
    Layout {
        name_path: r#"[id="info_box"] > p:nth-of-type(1) > span"#,
        field_path: r#"[id="info_box"] > p:nth-of-type(2) > span"#,
    },
    // 2: //*[@id="info_box"]/div[3]/p[1]/span -> div[3]/p[2]/span
    Layout {
        name_path: r#"[id="info_box"] > div:nth-of-type(3) > p:nth-of-type(1) > span"#,
        field_path: r#"[id="info_box"] > div:nth-of-type(3) > p:nth-of-type(2) > span"#,
    },
    // 3: //*[@id="info_box"]/p[1]/span -> div[3]/p[2]/span
    Layout {
        name_path: r#"[id="info_box"] > p:nth-of-type(1) > span"#,
        field_path: r#"[id="info_box"] > div:nth-of-type(3) > p:nth-of-type(2) > span"#,
    },
    // 4: //*[@id="info_box"]/div[3]/p[2]/span -> div[3]/p[3]/span
    Layout {
        name_path: r#"[id="info_box"] > div:nth-of-type(3) > p:nth-of-type(2) > span"#,
        field_path: r#"[id="info_box"] > div:nth-of-type(3) > p:nth-of-type(3) > span"#,
    },
    // 5: //*[@id="info_box"]/p[2]/span -> p[3]/span
    Layout {
        name_path: r#"[id="info_box"] > p:nth-of-type(2) > span"#,
        field_path: r#"[id="info_box"] > p:nth-of-type(3) > span"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_layouts() {
        assert_eq!(LAYOUTS.len(), 5);
    }

    #[test]
    fn every_selector_matches_a_full_template() {
        let p = "<p><span>x</span></p>";
        let inner = format!("<div>{p}{p}{p}</div>");
        let html = format!(r#"<div id="info_box">{p}{p}{p}{inner}{inner}{inner}</div>"#);
        let doc = crate::dom::parse(&html);
        for layout in LAYOUTS {
            assert_eq!(doc.select(layout.name_path).length(), 1, "{}", layout.name_path);
            assert_eq!(doc.select(layout.field_path).length(), 1, "{}", layout.field_path);
        }
    }

    #[test]
    fn third_layout_is_shadowed_by_first() {
        assert_eq!(LAYOUTS[0].name_path, LAYOUTS[2].name_path);
        assert_ne!(LAYOUTS[0].field_path, LAYOUTS[2].field_path);
    }
}
