use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{ItemKind, PressItem};

/// Caller-owned year-tab selections, fed back in on every recomputation.
/// The engine never stores these; it only reads and corrects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    pub awards_year: Option<i32>,
    pub mentions_year: Option<i32>,
}

/// Derived sections for one recomputation. `awards_year_tab` and
/// `mentions_year_tab` are the corrected selections the caller must store
/// and feed back on the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub featured: Option<PressItem>,
    pub awards_shown: Vec<PressItem>,
    pub mentions_shown: Vec<PressItem>,
    /// Distinct years in the awards universe, descending.
    pub awards_years: Vec<i32>,
    /// Distinct years in the mentions universe, descending.
    pub mentions_years: Vec<i32>,
    pub awards_year_tab: Option<i32>,
    pub mentions_year_tab: Option<i32>,
}

/// Recomputes every section from a filtered collection.
///
/// Pure and total: any input, including an empty collection, yields
/// well-defined (possibly empty) outputs, and identical inputs yield
/// identical outputs in identical order.
pub fn sectionize(items: &[PressItem], tabs: TabState) -> Sections {
    // Ingestion does not enforce id uniqueness, so dedupe here before
    // anything else. First occurrence wins.
    let mut ordered = dedupe_by_id(items.iter().cloned());
    ordered.sort_by(newest_first);

    let featured = ordered.first().cloned();
    let rest: Vec<PressItem> = match &featured {
        Some(head) => ordered
            .iter()
            .filter(|item| item.id != head.id)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    let mentions_only: Vec<PressItem> = rest
        .iter()
        .filter(|item| item.kind == ItemKind::Mention)
        .cloned()
        .collect();

    let mut awards_only: Vec<PressItem> = rest
        .iter()
        .filter(|item| item.kind == ItemKind::Award)
        .cloned()
        .collect();
    awards_only.sort_by(pinned_first_then_newest);

    // The featured item must not vanish from the Awards section merely
    // because it was promoted, so union it back in.
    let featured_award = featured
        .iter()
        .filter(|item| item.kind == ItemKind::Award)
        .cloned();
    let mut awards_universe = dedupe_by_id(awards_only.into_iter().chain(featured_award));
    awards_universe.sort_by(pinned_first_then_newest);

    let awards_years = distinct_years(&awards_universe);
    let mentions_years = distinct_years(&mentions_only);

    let awards_year_tab = correct_tab(tabs.awards_year, &awards_years);
    let mentions_year_tab = correct_tab(tabs.mentions_year, &mentions_years);

    // Pinned awards are always shown; non-pinned ones only for the
    // selected year.
    let mut awards_shown = dedupe_by_id(awards_universe.into_iter().filter(|item| {
        item.starred || awards_year_tab == Some(item.year())
    }));
    awards_shown.sort_by(pinned_first_then_newest);

    let mentions_shown = match mentions_year_tab {
        Some(year) => mentions_only
            .iter()
            .filter(|item| item.year() == year)
            .cloned()
            .collect(),
        // No years at all means nothing to filter by.
        None => mentions_only.clone(),
    };

    Sections {
        featured,
        awards_shown,
        mentions_shown,
        awards_years,
        mentions_years,
        awards_year_tab,
        mentions_year_tab,
    }
}

/// Total newest-first comparator: date descending, awards before mentions,
/// then issuer and title ascending. Used with a stable sort so items that
/// compare equal keep their input order.
fn newest_first(a: &PressItem, b: &PressItem) -> Ordering {
    b.published_at
        .cmp(&a.published_at)
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
        .then_with(|| a.issuer.cmp(&b.issuer))
        .then_with(|| a.title.cmp(&b.title))
}

/// Awards ordering: pinned items sort before non-pinned regardless of
/// date, newest-first within each group.
fn pinned_first_then_newest(a: &PressItem, b: &PressItem) -> Ordering {
    b.starred
        .cmp(&a.starred)
        .then_with(|| newest_first(a, b))
}

fn kind_rank(kind: ItemKind) -> u8 {
    match kind {
        ItemKind::Award => 0,
        ItemKind::Mention => 1,
    }
}

/// Stable set-union by id: first occurrence wins, input order preserved.
fn dedupe_by_id(items: impl Iterator<Item = PressItem>) -> Vec<PressItem> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

fn distinct_years(items: &[PressItem]) -> Vec<i32> {
    let mut years: Vec<i32> = items.iter().map(PressItem::year).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

/// Corrects an invalid tab to the most recent available year. Idempotent:
/// a valid tab passes through unchanged.
fn correct_tab(current: Option<i32>, years: &[i32]) -> Option<i32> {
    match current {
        Some(year) if years.contains(&year) => Some(year),
        _ => years.first().copied(),
    }
}
