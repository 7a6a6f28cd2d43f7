use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use press_core::PressItem;
use press_logging::{press_info, press_warn};

use crate::manifest::{normalize_manifest, PressManifest};
use crate::normalize::{normalize_item, ValidationError};
use crate::record::parse_record;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("content directory missing or unreadable: {0}")]
    ContentDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result of loading one language's content directory. A bad record is
/// reported in `failures` and never takes the rest of the batch down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedBatch {
    pub items: Vec<PressItem>,
    pub failures: Vec<ValidationError>,
}

/// Loads every `*.md` record in one language directory, in deterministic
/// (sorted filename) order.
pub fn load_press_dir(dir: &Path) -> Result<LoadedBatch, LoadError> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|err| LoadError::ContentDir(format!("{}: {err}", dir.display())))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("md"))
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut batch = LoadedBatch::default();
    for entry in entries {
        let source = entry.file_name().to_string_lossy().into_owned();
        let content = fs::read_to_string(entry.path())?;
        let record = parse_record(&content);
        match normalize_item(&record.meta, &record.body, &source) {
            Ok(item) => batch.items.push(item),
            Err(err) => {
                press_warn!("skipping record: {err}");
                batch.failures.push(err);
            }
        }
    }
    press_info!(
        "loaded {} press items from {} ({} rejected)",
        batch.items.len(),
        dir.display(),
        batch.failures.len()
    );
    Ok(batch)
}

/// Reads and normalizes the press-kit manifest. Manifest problems are
/// never fatal: an unreadable or unparseable file yields the defaults.
pub fn load_manifest(path: &Path) -> PressManifest {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            press_warn!("manifest unreadable at {}: {err}", path.display());
            return PressManifest::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => normalize_manifest(&value),
        Err(err) => {
            press_warn!("manifest is not valid JSON: {err}");
            PressManifest::default()
        }
    }
}
