mod common;

use common::{init_logging, item};
use pretty_assertions::assert_eq;

use press_core::{sectionize, ItemKind, TabState};

fn ids(items: &[press_core::PressItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn featured_awards_and_mentions_split() {
    init_logging();
    // Pinned old award, newer award, mention in between.
    let items = vec![
        item("a", ItemKind::Award, "2025-01-10", true),
        item("b", ItemKind::Award, "2026-02-01", false),
        item("c", ItemKind::Mention, "2025-06-01", false),
    ];

    let sections = sectionize(
        &items,
        TabState {
            awards_year: Some(2026),
            mentions_year: None,
        },
    );

    assert_eq!(sections.featured.as_ref().map(|f| f.id.as_str()), Some("b"));
    // The featured award stays in the awards universe; pinned `a` sorts
    // first despite being older.
    assert_eq!(ids(&sections.awards_shown), vec!["a", "b"]);
    assert_eq!(sections.awards_years, vec![2026, 2025]);
    assert_eq!(sections.awards_year_tab, Some(2026));
    assert_eq!(ids(&sections.mentions_shown), vec!["c"]);
    assert_eq!(sections.mentions_years, vec![2025]);
    assert_eq!(sections.mentions_year_tab, Some(2025));
}

#[test]
fn invalid_year_tab_corrects_to_most_recent() {
    init_logging();
    let items = vec![
        item("x", ItemKind::Award, "2025-03-01", false),
        item("y", ItemKind::Award, "2024-03-01", false),
        item("z", ItemKind::Award, "2025-08-01", false),
    ];

    let sections = sectionize(
        &items,
        TabState {
            awards_year: Some(2099),
            mentions_year: None,
        },
    );
    assert_eq!(sections.awards_years, vec![2025, 2024]);
    assert_eq!(sections.awards_year_tab, Some(2025));
}

#[test]
fn year_tab_correction_is_idempotent() {
    init_logging();
    let items = vec![
        item("x", ItemKind::Award, "2025-03-01", false),
        item("y", ItemKind::Award, "2024-03-01", false),
    ];

    let first = sectionize(
        &items,
        TabState {
            awards_year: Some(2099),
            mentions_year: Some(2099),
        },
    );
    // Feed the corrected tabs back in, as the caller would.
    let second = sectionize(
        &items,
        TabState {
            awards_year: first.awards_year_tab,
            mentions_year: first.mentions_year_tab,
        },
    );
    assert_eq!(first, second);
}

#[test]
fn pinned_awards_survive_any_year_tab() {
    init_logging();
    let items = vec![
        item("old-pinned", ItemKind::Award, "2019-05-01", true),
        item("recent", ItemKind::Award, "2026-01-15", false),
        item("recent-2", ItemKind::Award, "2026-03-15", false),
    ];

    for tab in [Some(2026), Some(2019), Some(2099), None] {
        let sections = sectionize(
            &items,
            TabState {
                awards_year: tab,
                mentions_year: None,
            },
        );
        assert!(
            sections.awards_shown.iter().any(|i| i.id == "old-pinned"),
            "pinned item missing for tab {tab:?}"
        );
        // Pinned-first ordering holds regardless of date.
        assert_eq!(sections.awards_shown[0].id, "old-pinned");
    }
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    init_logging();
    let mut first = item("dup", ItemKind::Award, "2025-04-01", false);
    first.issuer = "First Issuer".to_string();
    let mut second = item("dup", ItemKind::Award, "2023-04-01", false);
    second.issuer = "Second Issuer".to_string();
    let items = vec![
        first,
        second,
        item("other", ItemKind::Award, "2026-01-01", false),
    ];

    let sections = sectionize(
        &items,
        TabState {
            awards_year: Some(2025),
            mentions_year: None,
        },
    );

    // Only the first occurrence survives; 2023 never becomes a year tab.
    assert_eq!(ids(&sections.awards_shown), vec!["dup"]);
    assert_eq!(sections.awards_shown[0].issuer, "First Issuer");
    assert_eq!(sections.awards_years, vec![2026, 2025]);
}

#[test]
fn featured_is_excluded_from_the_rest() {
    init_logging();
    let items = vec![
        item("m1", ItemKind::Mention, "2026-05-01", false),
        item("m2", ItemKind::Mention, "2025-05-01", false),
    ];

    let sections = sectionize(&items, TabState::default());

    let featured = sections.featured.expect("non-empty input has a featured item");
    assert_eq!(featured.id, "m1");
    assert!(sections.mentions_shown.iter().all(|i| i.id != "m1"));
    // The corrected mentions tab lands on the most recent remaining year.
    assert_eq!(sections.mentions_year_tab, Some(2025));
    assert_eq!(ids(&sections.mentions_shown), vec!["m2"]);
}

#[test]
fn featured_award_stays_in_awards_universe() {
    init_logging();
    // A single award: featured and still shown under Awards.
    let items = vec![item("only", ItemKind::Award, "2026-02-01", false)];

    let sections = sectionize(&items, TabState::default());

    assert_eq!(sections.featured.as_ref().map(|f| f.id.as_str()), Some("only"));
    assert_eq!(ids(&sections.awards_shown), vec!["only"]);
    assert_eq!(sections.awards_year_tab, Some(2026));
}

#[test]
fn empty_collection_yields_empty_sections() {
    init_logging();
    let sections = sectionize(
        &[],
        TabState {
            awards_year: Some(2025),
            mentions_year: Some(2025),
        },
    );

    assert_eq!(sections.featured, None);
    assert!(sections.awards_shown.is_empty());
    assert!(sections.mentions_shown.is_empty());
    assert!(sections.awards_years.is_empty());
    assert_eq!(sections.awards_year_tab, None);
    assert_eq!(sections.mentions_year_tab, None);
}

#[test]
fn awards_sort_before_mentions_on_equal_dates() {
    init_logging();
    let items = vec![
        item("mention", ItemKind::Mention, "2026-02-01", false),
        item("award", ItemKind::Award, "2026-02-01", false),
    ];

    let sections = sectionize(&items, TabState::default());
    assert_eq!(
        sections.featured.as_ref().map(|f| f.id.as_str()),
        Some("award")
    );
}

#[test]
fn ties_keep_input_order_deterministically() {
    init_logging();
    // Identical date, kind, issuer and title: only ids differ.
    let mut one = item("tie-1", ItemKind::Mention, "2025-02-01", false);
    one.title = "Same".to_string();
    let mut two = item("tie-2", ItemKind::Mention, "2025-02-01", false);
    two.title = "Same".to_string();
    let newer = item("head", ItemKind::Mention, "2026-01-01", false);
    let items = vec![newer, one, two];

    let first = sectionize(&items, TabState { awards_year: None, mentions_year: Some(2025) });
    let second = sectionize(&items, TabState { awards_year: None, mentions_year: Some(2025) });

    assert_eq!(ids(&first.mentions_shown), vec!["tie-1", "tie-2"]);
    assert_eq!(first, second);
}
