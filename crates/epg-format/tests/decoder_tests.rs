use epg_engine::LocalizedText;
use epg_format::{decode_feed, decode_feed_file, FormatError};
use std::path::Path;

/// Helper: path to the sample feed fixture.
fn sample_feed_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample_feed.xml"
    ))
}

// ============================================================================
// Channels
// ============================================================================

#[test]
fn decode_declared_channels() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();

    assert_eq!(feed.channels.len(), 2);
    let alfa = &feed.channels[0];
    assert_eq!(alfa.id, "Alfa");
    assert_eq!(
        alfa.display_names,
        vec![
            LocalizedText::new(Some("bg"), "Алфа"),
            LocalizedText::new(Some("en"), "Alfa"),
        ]
    );
    assert_eq!(alfa.url.as_deref(), Some("http://alfa.example"));
    assert_eq!(feed.channels[1].url, None);
}

// ============================================================================
// Programmes
// ============================================================================

#[test]
fn decode_programmes_in_document_order() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();

    let keys: Vec<&str> = feed
        .programmes
        .iter()
        .map(|p| p.channel_key.as_str())
        .collect();
    assert_eq!(keys, vec!["Alfa", "Alfa", "Gamma"]);
}

#[test]
fn decode_timestamps_verbatim() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();
    let first = &feed.programmes[0];

    assert_eq!(first.start, "20170701080000 +0300");
    assert_eq!(first.stop, "20170701100000 +0300");
}

#[test]
fn decode_all_title_variants() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();
    let first = &feed.programmes[0];

    assert_eq!(
        first.titles,
        vec![
            LocalizedText::new(Some("bg"), "Добро утро, българи"),
            LocalizedText::new(Some("en"), "Good morning, Bulgarians"),
        ]
    );
    assert_eq!(
        first.descriptions,
        vec![LocalizedText::new(Some("bg"), "Сутрешен блок")]
    );
}

#[test]
fn decode_credits_and_metadata() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();
    let first = &feed.programmes[0];

    assert_eq!(first.actors, vec!["Ivan Ivanov", "Maria Georgieva"]);
    assert_eq!(first.directors, vec!["Petar Petrov"]);
    assert_eq!(first.countries, vec!["BG", "MK"]);
    assert_eq!(first.date.as_deref(), Some("2017"));
    assert_eq!(first.category.as_deref(), Some("Новини"));
    assert_eq!(first.episode_num.as_deref(), Some("S1E12"));
}

#[test]
fn decode_sparse_programme() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();
    let second = &feed.programmes[1];

    assert!(second.descriptions.is_empty());
    assert!(second.actors.is_empty());
    assert!(second.directors.is_empty());
    assert!(second.countries.is_empty());
    assert_eq!(second.date, None);
    assert_eq!(second.episode_num, None);
}

#[test]
fn decode_untagged_title() {
    let feed = decode_feed_file(sample_feed_path()).unwrap();
    assert_eq!(
        feed.programmes[2].titles,
        vec![LocalizedText::new(None, "Unlisted")]
    );
}

#[test]
fn decode_empty_feed() {
    let feed = decode_feed("<tv></tv>").unwrap();
    assert!(feed.channels.is_empty());
    assert!(feed.programmes.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn decode_malformed_xml_fails() {
    let err = decode_feed("<tv><programme start=").unwrap_err();
    assert!(matches!(err, FormatError::Feed(_)));
}

#[test]
fn decode_programme_without_channel_fails() {
    let xml = r#"<tv>
      <programme start="20170701080000 +0300" stop="20170701100000 +0300">
        <title>Orphan</title>
      </programme>
    </tv>"#;
    assert!(matches!(decode_feed(xml), Err(FormatError::Feed(_))));
}

#[test]
fn decode_missing_file_fails_with_path() {
    let err = decode_feed_file(Path::new("/nonexistent/feed.xml")).unwrap_err();
    assert!(matches!(err, FormatError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/feed.xml"));
}
