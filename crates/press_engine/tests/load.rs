use std::fs;

use pretty_assertions::assert_eq;

use press_engine::{load_manifest, load_press_dir, PressManifest};

const GOOD_AWARD: &str = "---\n\
    kind: award\n\
    id: michelin-2025\n\
    publishedAt: 2025-05-14\n\
    issuer: Guía MICHELIN\n\
    for: restaurant\n\
    title: Una Estrella\n\
    starred: true\n\
    link: Guide | https://guide.michelin.com/olivea\n\
    ---\n\
    Recognized in the 2025 selection.\n";

const GOOD_MENTION: &str = "---\n\
    kind: mention\n\
    id: afar-2025\n\
    publishedAt: 2025-09-03\n\
    issuer: AFAR\n\
    for: hotel\n\
    title: Where the valley slows down\n\
    link: Read | https://afar.com/olivea\n\
    ---\n\
    A hotel built around a garden.\n";

// No links at all: must fail normalization.
const BAD_RECORD: &str = "---\n\
    kind: award\n\
    id: broken\n\
    publishedAt: 2025-01-01\n\
    issuer: Somebody\n\
    for: cafe\n\
    title: Broken entry\n\
    ---\n";

#[test]
fn batch_loads_good_records_and_reports_bad_ones() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("a-award.md"), GOOD_AWARD).unwrap();
    fs::write(dir.path().join("b-broken.md"), BAD_RECORD).unwrap();
    fs::write(dir.path().join("c-mention.md"), GOOD_MENTION).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a record").unwrap();

    let batch = load_press_dir(dir.path()).unwrap();

    let ids: Vec<_> = batch.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["michelin-2025", "afar-2025"]);
    assert!(batch.items[0].starred);

    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].source_record(), "b-broken.md");
    assert_eq!(batch.failures[0].field(), "links");
}

#[test]
fn empty_directory_is_an_empty_batch() {
    let dir = tempfile::TempDir::new().unwrap();
    let batch = load_press_dir(dir.path()).unwrap();
    assert!(batch.items.is_empty());
    assert!(batch.failures.is_empty());
}

#[test]
fn missing_directory_is_a_load_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(load_press_dir(&missing).is_err());
}

#[test]
fn manifest_load_never_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    // Missing file: defaults.
    let missing = dir.path().join("press.json");
    assert_eq!(load_manifest(&missing), PressManifest::default());

    // Invalid JSON: defaults.
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{not json").unwrap();
    assert_eq!(load_manifest(&broken), PressManifest::default());

    // Valid JSON: normalized field by field.
    let valid = dir.path().join("valid.json");
    fs::write(&valid, r#"{"contactEmail": "prensa@olivea.mx"}"#).unwrap();
    assert_eq!(load_manifest(&valid).contact_email, "prensa@olivea.mx");
}
