use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// What kind of press coverage an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A formal recognition or distinction.
    Award,
    /// Editorial coverage without formal recognition.
    Mention,
}

/// Which business unit an item pertains to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    /// The overall brand.
    Olivea,
    Hotel,
    Restaurant,
    Cafe,
}

/// Content language. Records are grouped per language on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

/// An outbound link to the original coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressLink {
    pub label: String,
    pub href: String,
}

/// Optional cover image, a display hint for mention cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    /// Site-root-relative path (`/...`).
    pub src: String,
    pub alt: Option<String>,
}

/// One validated press item. Immutable once constructed; the whole
/// collection is rebuilt from source records on every content load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressItem {
    pub kind: ItemKind,
    /// Unique within one language's collection. Uniqueness is not enforced
    /// at ingestion; the sectioning layer dedupes defensively.
    pub id: String,
    pub published_at: NaiveDate,
    pub issuer: String,
    pub identity: Identity,
    pub title: String,
    /// Sub-category display label.
    pub section: Option<String>,
    pub tags: Vec<String>,
    /// Non-empty; every href is http(s).
    pub links: Vec<PressLink>,
    /// Normalized free text: trimmed, LF line endings, no 3+ blank runs.
    pub blurb: String,
    pub cover: Option<CoverImage>,
    /// Pinned award marker. Always false for mentions.
    pub starred: bool,
}

impl PressItem {
    /// Calendar year of `published_at`, the key for year-tab filtering.
    pub fn year(&self) -> i32 {
        self.published_at.year()
    }
}
