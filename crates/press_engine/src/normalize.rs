use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use press_core::{CoverImage, Identity, ItemKind, PressItem, PressLink};
use press_logging::press_debug;

/// A malformed required field in one content record. Fatal for that
/// record only; sibling records in the batch load independently.
// Display and Error are implemented by hand: thiserror's derive would
// treat the `source` field (the record path) as an error source, which
// a `String` cannot be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField { source: String, field: &'static str },
    InvalidField {
        source: String,
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { source, field } => {
                write!(f, "{source}: missing required field `{field}`")
            }
            ValidationError::InvalidField {
                source,
                field,
                reason,
            } => {
                write!(f, "{source}: invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// The source record the error came from.
    pub fn source_record(&self) -> &str {
        match self {
            ValidationError::MissingField { source, .. } => source,
            ValidationError::InvalidField { source, .. } => source,
        }
    }

    /// The offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. } => field,
            ValidationError::InvalidField { field, .. } => field,
        }
    }
}

/// Validates one raw record into a `PressItem`.
///
/// Required fields are strict: a press claim with a bad date or link is
/// rejected outright rather than published half-formed. Optional fields
/// (`section`, `tags`, `cover`, `starred`) default away instead.
pub fn normalize_item(
    meta: &Map<String, Value>,
    body: &str,
    source: &str,
) -> Result<PressItem, ValidationError> {
    let kind = match required_str(meta, "kind", source)? {
        "award" => ItemKind::Award,
        "mention" => ItemKind::Mention,
        other => {
            return Err(invalid(source, "kind", format!("`{other}` is not award|mention")));
        }
    };

    let id = required_str(meta, "id", source)?.to_string();
    let published_at = parse_published_at(meta, source)?;
    let issuer = required_str(meta, "issuer", source)?.to_string();

    let identity = match required_str(meta, "for", source)? {
        "olivea" => Identity::Olivea,
        "hotel" => Identity::Hotel,
        "restaurant" => Identity::Restaurant,
        "cafe" => Identity::Cafe,
        other => {
            return Err(invalid(
                source,
                "for",
                format!("`{other}` is not olivea|hotel|restaurant|cafe"),
            ));
        }
    };

    let title = required_str(meta, "title", source)?.to_string();
    let links = parse_links(meta, source)?;

    let section = meta
        .get("section")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .map(ToOwned::to_owned);

    let tags = parse_tags(meta);

    // Cover images are a display hint for mention cards only.
    let cover = if kind == ItemKind::Mention {
        parse_cover(meta)
    } else {
        None
    };

    // Pinning only means something for awards.
    let starred = kind == ItemKind::Award
        && meta.get("starred").and_then(Value::as_bool).unwrap_or(false);

    press_debug!("normalized press item `{id}` from {source}");

    Ok(PressItem {
        kind,
        id,
        published_at,
        issuer,
        identity,
        title,
        section,
        tags,
        links,
        blurb: normalize_blurb(body),
        cover,
        starred,
    })
}

/// Trims, unifies line endings and collapses runs of 3+ blank lines down
/// to a single blank line.
pub fn normalize_blurb(body: &str) -> String {
    let unified = body.replace("\r\n", "\n").replace('\r', "\n");
    let mut out: Vec<&str> = Vec::new();
    let mut blanks = 0usize;
    for line in unified.lines() {
        if line.trim().is_empty() {
            blanks += 1;
            continue;
        }
        if !out.is_empty() {
            // A run of 3 or more blank lines collapses to one.
            let keep = if blanks >= 3 { 1 } else { blanks };
            for _ in 0..keep {
                out.push("");
            }
        }
        out.push(line);
        blanks = 0;
    }
    out.join("\n").trim().to_string()
}

fn required_str<'m>(
    meta: &'m Map<String, Value>,
    field: &'static str,
    source: &str,
) -> Result<&'m str, ValidationError> {
    let value = meta
        .get(field)
        .ok_or_else(|| missing(source, field))?;
    let text = value
        .as_str()
        .map(str::trim)
        .ok_or_else(|| invalid(source, field, format!("expected a string, got {value}")))?;
    if text.is_empty() {
        return Err(missing(source, field));
    }
    Ok(text)
}

fn parse_published_at(meta: &Map<String, Value>, source: &str) -> Result<NaiveDate, ValidationError> {
    let raw = required_str(meta, "publishedAt", source)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| invalid(source, "publishedAt", format!("`{raw}` is not a YYYY-MM-DD date")))
}

/// One bad label or href fails the whole record; partial link lists are
/// never silently shipped.
fn parse_links(meta: &Map<String, Value>, source: &str) -> Result<Vec<PressLink>, ValidationError> {
    let raw = meta.get("links").ok_or_else(|| missing(source, "links"))?;
    let entries = raw
        .as_array()
        .ok_or_else(|| invalid(source, "links", "expected a list".to_string()))?;
    if entries.is_empty() {
        return Err(missing(source, "links"));
    }

    let mut links = Vec::with_capacity(entries.len());
    for entry in entries {
        let label = entry
            .get("label")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .ok_or_else(|| invalid(source, "links", "link without a label".to_string()))?;
        let href = entry
            .get("href")
            .and_then(Value::as_str)
            .map(str::trim)
            .ok_or_else(|| invalid(source, "links", "link without an href".to_string()))?;
        if !(href.starts_with("http://") || href.starts_with("https://")) {
            return Err(invalid(source, "links", format!("`{href}` is not http(s)")));
        }
        links.push(PressLink {
            label: label.to_string(),
            href: href.to_string(),
        });
    }
    Ok(links)
}

fn parse_tags(meta: &Map<String, Value>) -> Vec<String> {
    let Some(entries) = meta.get("tags").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut tags: Vec<String> = Vec::new();
    for entry in entries {
        let Some(tag) = entry.as_str().map(str::trim).filter(|tag| !tag.is_empty()) else {
            continue;
        };
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn parse_cover(meta: &Map<String, Value>) -> Option<CoverImage> {
    let cover = meta.get("cover")?.as_object()?;
    let src = cover
        .get("src")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|src| src.starts_with('/'))?;
    let alt = cover
        .get("alt")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(ToOwned::to_owned);
    Some(CoverImage {
        src: src.to_string(),
        alt,
    })
}

fn missing(source: &str, field: &'static str) -> ValidationError {
    ValidationError::MissingField {
        source: source.to_string(),
        field,
    }
}

fn invalid(source: &str, field: &'static str, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidField {
        source: source.to_string(),
        field,
        reason: reason.into(),
    }
}
