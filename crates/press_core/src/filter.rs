use crate::{Identity, ItemKind, PressItem};

/// Narrowing criteria for a press collection. `None` (or an empty query)
/// means pass-through for that stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub kind: Option<ItemKind>,
    pub identity: Option<Identity>,
    pub year: Option<i32>,
    /// Case-insensitive substring match over title, issuer, section,
    /// blurb and tags.
    pub query: String,
}

/// Applies the filter pipeline in fixed stage order: kind, identity, year,
/// then the free-text scan. The discrete stages run first so the text scan
/// only touches survivors.
pub fn filter_items(items: &[PressItem], criteria: &FilterCriteria) -> Vec<PressItem> {
    let query = criteria.query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| criteria.kind.is_none_or(|kind| item.kind == kind))
        .filter(|item| criteria.identity.is_none_or(|identity| item.identity == identity))
        .filter(|item| criteria.year.is_none_or(|year| item.year() == year))
        .filter(|item| query.is_empty() || haystack(item).contains(&query))
        .cloned()
        .collect()
}

fn haystack(item: &PressItem) -> String {
    let section = item.section.as_deref().unwrap_or("");
    let tags = item.tags.join(" ");
    format!(
        "{} {} {} {} {}",
        item.title, item.issuer, section, item.blurb, tags
    )
    .to_lowercase()
}
