use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{ItemKind, Lang, PressItem};

/// A display badge for a recognized award program. Derived by rule
/// matching, never stored with the item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    /// Stable rule key, usable as a render key by the consumer.
    pub key: &'static str,
    pub label: String,
    /// Site-root-relative icon asset path.
    pub icon: &'static str,
    /// Visual scale override for icons that render small at default size.
    pub scale: Option<f32>,
}

struct BadgeRule {
    key: &'static str,
    pattern: &'static str,
    label_es: &'static str,
    label_en: &'static str,
    icon: &'static str,
    scale: Option<f32>,
}

// Declaration order is display order. Rules are not mutually exclusive:
// a Green Star entry also matches the generic MICHELIN rule and carries
// both badges.
const RULES: &[BadgeRule] = &[
    BadgeRule {
        key: "michelin-star",
        pattern: r"michelin.*(star|estrella)|(star|estrella).*michelin",
        label_es: "Estrella MICHELIN",
        label_en: "MICHELIN Star",
        icon: "/press/badges/michelin-star.svg",
        scale: None,
    },
    BadgeRule {
        key: "michelin-green-star",
        pattern: r"green\s*star|estrella\s*verde",
        label_es: "Estrella Verde MICHELIN",
        label_en: "MICHELIN Green Star",
        icon: "/press/badges/michelin-green-star.svg",
        scale: None,
    },
    BadgeRule {
        key: "michelin-key",
        pattern: r"michelin.*(key|llave)|(key|llave).*michelin",
        label_es: "Llave MICHELIN",
        label_en: "MICHELIN Key",
        icon: "/press/badges/michelin-key.svg",
        scale: None,
    },
    BadgeRule {
        key: "bib-gourmand",
        pattern: r"bib\s*gourmand",
        label_es: "Bib Gourmand",
        label_en: "Bib Gourmand",
        icon: "/press/badges/bib-gourmand.svg",
        scale: None,
    },
    BadgeRule {
        key: "fifty-best",
        pattern: r"50\s*best",
        label_es: "50 Best",
        label_en: "50 Best",
        icon: "/press/badges/50-best.svg",
        scale: Some(1.15),
    },
    BadgeRule {
        key: "repsol-sol",
        pattern: r"repsol",
        label_es: "Sol Repsol",
        label_en: "Repsol Sun",
        icon: "/press/badges/repsol-sol.svg",
        scale: None,
    },
];

static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| {
            Regex::new(&format!("(?i){}", rule.pattern))
                .unwrap_or_else(|err| panic!("bad badge pattern `{}`: {err}", rule.key))
        })
        .collect()
});

/// Matches every badge rule against an award's issuer, title and tags.
/// Mentions never carry badges. Badges come back in rule-declaration
/// order; order never affects which rules fire.
pub fn badges_for(item: &PressItem, lang: Lang) -> Vec<Badge> {
    if item.kind != ItemKind::Award {
        return Vec::new();
    }
    let subject = format!("{} {} {}", item.issuer, item.title, item.tags.join(" "));
    RULES
        .iter()
        .zip(MATCHERS.iter())
        .filter(|(_, matcher)| matcher.is_match(&subject))
        .map(|(rule, _)| Badge {
            key: rule.key,
            label: match lang {
                Lang::Es => rule.label_es.to_string(),
                Lang::En => rule.label_en.to_string(),
            },
            icon: rule.icon,
            scale: rule.scale,
        })
        .collect()
}
