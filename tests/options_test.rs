use std::path::PathBuf;

use protein_scrape::{scrape_document, LogConfig, Options, DEFAULT_LOG_FILE};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.url.is_none());
    assert!(!options.force_insert);
    assert!(!options.force_delete);
    assert!(!options.json);
    assert_eq!(options.log, LogConfig::default());
    assert_eq!(options.log.file, PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        force_delete: true,
        url: Some("https://example.com/protein/7".to_string()),
        ..Options::default()
    };

    assert!(options.force_delete);
    assert!(!options.force_insert);
    assert_eq!(options.url.as_deref(), Some("https://example.com/protein/7"));
    assert!(options.log.echo_stdout);
}

#[test]
fn persistence_flags_do_not_change_the_record() {
    let html = r#"<div id="info_box"><p><span>Keratin</span></p>
        <p><span>Shoots:</span> R</p></div>"#;

    let plain = scrape_document(html, &Options::default()).expect("expected Ok(_)");
    let forced = scrape_document(
        html,
        &Options {
            force_insert: true,
            force_delete: true,
            ..Options::default()
        },
    )
    .expect("expected Ok(_)");

    assert_eq!(plain, forced);
    assert_eq!(forced.shot_stance, "R");
}
