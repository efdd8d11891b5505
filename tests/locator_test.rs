use protein_scrape::{dom, etree, selector, scrape_document, Error, Options};

fn field_texts(html: &str) -> (usize, Vec<String>) {
    let doc = dom::parse(html);
    let located = match selector::locate(&doc) {
        Some(located) => located,
        None => panic!("expected a layout to match"),
    };
    let texts = located
        .field_nodes
        .iter()
        .filter_map(etree::text)
        .collect();
    (located.variant, texts)
}

#[test]
fn layout_1_name_in_first_paragraph() {
    let html = r#"
        <div id="info_box">
          <p><span>NAME</span></p>
          <p><span>FIELDS_P2</span></p>
          <p><span>FIELDS_P3</span></p>
        </div>
    "#;
    assert_eq!(field_texts(html), (1, vec!["FIELDS_P2".to_string()]));
}

#[test]
fn layout_2_name_in_third_div() {
    let html = r#"
        <div id="info_box">
          <div></div>
          <div><p><span>DECOY</span></p></div>
          <div>
            <p><span>NAME</span></p>
            <p><span>FIELDS_DIV3_P2</span></p>
          </div>
        </div>
    "#;
    assert_eq!(field_texts(html), (2, vec!["FIELDS_DIV3_P2".to_string()]));
}

#[test]
fn layout_3_is_shadowed_by_layout_1() {
    // Matches the name path of layout 3, which is also the name path of
    // layout 1, so layout 1 and its field path win.
    let html = r#"
        <div id="info_box">
          <p><span>NAME</span></p>
          <div></div><div></div>
          <div><p></p><p><span>FIELDS_DIV3_P2</span></p></div>
        </div>
    "#;
    let (variant, texts) = field_texts(html);
    assert_eq!(variant, 1);
    assert!(texts.is_empty());
}

#[test]
fn layout_4_name_in_second_paragraph_of_third_div() {
    let html = r#"
        <div id="info_box">
          <div></div><div></div>
          <div>
            <p>no spans here</p>
            <p><span>NAME</span></p>
            <p><span>FIELDS_DIV3_P3</span><span>MORE</span></p>
          </div>
        </div>
    "#;
    assert_eq!(
        field_texts(html),
        (4, vec!["FIELDS_DIV3_P3".to_string(), "MORE".to_string()])
    );
}

#[test]
fn layout_5_name_in_second_paragraph() {
    let html = r#"
        <div id="info_box">
          <p>banner without spans</p>
          <p><span>NAME</span></p>
          <p><span>FIELDS_P3</span></p>
        </div>
    "#;
    assert_eq!(field_texts(html), (5, vec!["FIELDS_P3".to_string()]));
}

#[test]
fn earlier_layout_wins_when_several_match() {
    // Both layout 2 and layout 5 name paths match; layout 2 comes first.
    let html = r#"
        <div id="info_box">
          <p>banner</p>
          <p><span>NAME_P2</span></p>
          <p><span>FIELDS_P3</span></p>
          <div></div><div></div>
          <div><p><span>NAME_DIV</span></p><p><span>FIELDS_DIV3_P2</span></p></div>
        </div>
    "#;
    assert_eq!(field_texts(html), (2, vec!["FIELDS_DIV3_P2".to_string()]));
}

#[test]
fn unsupported_layouts_fail_with_url() {
    let pages = [
        "<html><body><p>Not a profile</p></body></html>",
        r#"<div id="other_box"><p><span>NAME</span></p></div>"#,
        r#"<div id="info_box"><p>text only</p><p>still text</p></div>"#,
        r#"<div id="info_box"><section><p><span>NAME</span></p></section></div>"#,
    ];
    let options = Options {
        url: Some("https://example.com/protein/404".to_string()),
        ..Options::default()
    };
    for html in pages {
        match scrape_document(html, &options) {
            Err(Error::UnsupportedLayout { url }) => {
                assert_eq!(url, "https://example.com/protein/404");
            }
            other => panic!("expected UnsupportedLayout, got {other:?}"),
        }
    }
}
