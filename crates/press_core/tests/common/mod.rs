use std::sync::Once;

use chrono::NaiveDate;
use press_core::{Identity, ItemKind, PressItem, PressLink};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(press_logging::initialize_for_tests);
}

pub fn item(id: &str, kind: ItemKind, date: &str, starred: bool) -> PressItem {
    PressItem {
        kind,
        id: id.to_string(),
        published_at: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        issuer: "Example Guide".to_string(),
        identity: Identity::Restaurant,
        title: format!("Title {id}"),
        section: None,
        tags: Vec::new(),
        links: vec![PressLink {
            label: "Read".to_string(),
            href: "https://example.com/coverage".to_string(),
        }],
        blurb: String::new(),
        cover: None,
        starred,
    }
}
