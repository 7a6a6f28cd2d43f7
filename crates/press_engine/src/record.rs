use serde_json::{Map, Value};

/// One raw content record: a loosely-typed metadata map plus the free-form
/// body text that follows the metadata block.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub meta: Map<String, Value>,
    pub body: String,
}

/// Splits a content file into its `---`-delimited metadata block and body.
///
/// The block is `key: value` lines. A few keys get shape-aware handling so
/// the normalizer sees the structure the wire format implies:
/// - repeated `link:` lines (`Label | https://...`) accumulate into a
///   `links` array of `{label, href}` objects;
/// - `tags:` is a comma-separated list;
/// - `cover:` is `src | alt text` (alt optional);
/// - `starred:` parses `true`/`false`, anything else stays a string for
///   the normalizer to default away.
///
/// A file without a metadata block yields an empty map; the normalizer
/// then rejects it on the first missing required field.
pub fn parse_record(content: &str) -> RawRecord {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return RawRecord {
            meta: Map::new(),
            body: content.to_string(),
        };
    }

    let mut meta = Map::new();
    let mut links = Vec::new();
    let mut closed = false;
    for line in &mut lines {
        if line.trim() == "---" {
            closed = true;
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "link" => links.push(parse_link(value)),
            "tags" => {
                let tags: Vec<Value> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(|tag| Value::String(tag.to_string()))
                    .collect();
                meta.insert("tags".to_string(), Value::Array(tags));
            }
            "cover" => {
                meta.insert("cover".to_string(), parse_cover(value));
            }
            "starred" => {
                let parsed = match value {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    other => Value::String(other.to_string()),
                };
                meta.insert("starred".to_string(), parsed);
            }
            _ => {
                meta.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }
    if !links.is_empty() {
        meta.insert("links".to_string(), Value::Array(links));
    }

    // An unclosed block is treated as having no body.
    let body = if closed {
        lines.collect::<Vec<_>>().join("\n")
    } else {
        String::new()
    };

    RawRecord { meta, body }
}

fn parse_link(value: &str) -> Value {
    let (label, href) = match value.split_once('|') {
        Some((label, href)) => (label.trim(), href.trim()),
        None => ("", value),
    };
    let mut link = Map::new();
    link.insert("label".to_string(), Value::String(label.to_string()));
    link.insert("href".to_string(), Value::String(href.to_string()));
    Value::Object(link)
}

fn parse_cover(value: &str) -> Value {
    let (src, alt) = match value.split_once('|') {
        Some((src, alt)) => (src.trim(), Some(alt.trim())),
        None => (value, None),
    };
    let mut cover = Map::new();
    cover.insert("src".to_string(), Value::String(src.to_string()));
    if let Some(alt) = alt.filter(|alt| !alt.is_empty()) {
        cover.insert("alt".to_string(), Value::String(alt.to_string()));
    }
    Value::Object(cover)
}
