//! Press core: pure curation logic over validated press items.
//!
//! Everything here is synchronous, total and free of I/O: filtering,
//! sectioning (featured/awards/mentions with pinning and year tabs) and
//! badge rule matching. Ingestion lives in `press_engine`.
mod badge;
mod filter;
mod item;
mod section;

pub use badge::{badges_for, Badge};
pub use filter::{filter_items, FilterCriteria};
pub use item::{CoverImage, Identity, ItemKind, Lang, PressItem, PressLink};
pub use section::{sectionize, Sections, TabState};
